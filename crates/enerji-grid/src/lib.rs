//! Enerji Grid - sortable, exportable tables for bilingual statistical data.
//!
//! A grid renders a list of flat records under a column specification, sorts them the way a
//! reader of the active language expects, and writes exactly what it shows to CSV. It
//! supports:
//!
//! - Name aliasing: one `name` column resolves to `name` or `nameEN` per language
//! - Stable sorting with locale collation for strings and numeric order for numbers
//! - Header-click toggling with a deterministic direction contract
//! - Display strategies (grouped numbers, percents, shares) that never leak into exports
//! - Quoted CSV export in display order
//!
//! # Quick Start
//!
//! ```rust
//! use enerji_grid::{Column, ColumnSpec, DataGrid, GridContext, Language, Record, Render};
//!
//! let columns = ColumnSpec::builder()
//!     .column(Column::new("name", "Enerji Kaynağı"))
//!     .column(Column::new("value", "Pay (%)").render(Render::Percent))
//!     .build();
//!
//! let records = vec![
//!     Record::new().with("name", "Elektrik").with("nameEN", "Electricity").with("value", 22.2),
//!     Record::new().with("name", "Petrol Ürünleri").with("nameEN", "Petroleum Products").with("value", 40.9),
//! ];
//!
//! let mut grid = DataGrid::new("Yakıt Payları", columns);
//! let ctx = GridContext::new(Language::Tr).unwrap();
//!
//! // Starts sorted by value, largest first.
//! assert_eq!(grid.rows(&records, &ctx)[0], vec!["Petrol Ürünleri", "%40.9"]);
//!
//! // Clicking the same header flips the direction.
//! grid.request_sort("value");
//! let csv = grid.export(&records, &ctx).unwrap().content;
//! assert_eq!(
//!     csv,
//!     "\"Enerji Kaynağı\",\"Pay (%)\"\n\"Elektrik\",\"22.2\"\n\"Petrol Ürünleri\",\"40.9\""
//! );
//! ```
//!
//! # Sorting Semantics
//!
//! | Kinds | Order |
//! |-------|-------|
//! | String / String | Locale collation of the active language |
//! | Number / Number | Numeric |
//! | Bool / Bool | `false` before `true` |
//! | Anything else | Equal (source order kept) |
//!
//! Clicking a header sorts ascending, unless the grid is already ascending on that key,
//! in which case it sorts descending.

mod column;
mod context;
mod error;
mod export;
mod grid;
mod language;
mod ordering;
mod project;
mod record;
mod save;
mod sort;
mod value;

// Re-export public API
pub use column::{Column, ColumnSpec, ColumnSpecBuilder, Render, RenderFn};
pub use context::{format_percent, Collation, GridContext, NumberFormat};
pub use error::{GridError, Result};
pub use export::{serialize, ExportArtifact, CSV_MIME_TYPE, DEFAULT_FILE_NAME};
pub use grid::DataGrid;
pub use language::Language;
pub use ordering::{compare_values, Dir, SortState, DEFAULT_SORT_KEY};
pub use project::{is_name_key, resolve_field, ALTERNATE_NAME_KEY, PRIMARY_NAME_KEY};
pub use record::{FieldSource, Record};
pub use save::{DirectorySink, SaveTarget};
pub use sort::sort;
pub use value::{Number, Value};

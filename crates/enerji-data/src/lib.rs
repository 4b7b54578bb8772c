//! Enerji Data - the energy statistics dataset behind the dashboard tables.
//!
//! This crate holds the published final-consumption figures (industry, services, transport,
//! household and the PEFA energy accounts) and the transforms that turn them into grid
//! tables and chart series:
//!
//! - [`MasterData::embedded`]: the dataset shipped with the crate
//! - [`build_table`]: any of the eleven dashboard tables as an [`enerji_grid::DataGrid`]
//! - [`overview_rows`] / [`pie_slices`]: sector totals under a [`FuelFilter`]
//! - [`with_palette`] / [`LegendState`]: chart series with toggleable legends
//!
//! ```rust
//! use enerji_data::{build_table, MasterData, TableId, TableOptions};
//! use enerji_grid::{GridContext, Language};
//!
//! let data = MasterData::embedded().unwrap();
//! let ctx = GridContext::new(Language::En).unwrap();
//! let table = build_table(TableId::TransportFuels, data, Language::En, &TableOptions::default());
//!
//! assert_eq!(table.title(), "All Transport Fuels (TJ)");
//! assert_eq!(table.rows(&ctx)[0], vec!["Petroleum Products", "1,177,889"]);
//! ```

mod dataset;
mod error;
mod fuel;
mod labels;
mod legend;
mod model;
mod overview;
mod pefa;
mod tables;

// Re-export public API
pub use dataset::MASTER_JSON;
pub use error::{DataError, Result};
pub use fuel::{unique_fuels, FuelFilter, FuelOption, ALL_FUELS, ALL_FUELS_TR};
pub use labels::{labels, TableLabels};
pub use legend::{
    legend_entries, palette_color, visible_series, with_palette, LegendEntry, LegendState, Series,
    ACCENT, CHART_PALETTE, HOUSEHOLD_FUELS_CHART, MUTED_COLOR, PRIMARY, PURPLE, SECONDARY, SUCCESS,
    TRANSPORT_VEHICLES_CHART,
};
pub use model::{
    localized_name, FocusSector, MasterData, Measure, NamedValue, PefaData, PefaFuel, PefaSector,
    SectorData,
};
pub use overview::{
    filtered_total, overview_rows, pie_slices, sector_for_label, total, OverviewRow, Sector,
};
pub use pefa::{filtered_fuels, top_fuel, top_sector, total_use, FuelSelection};
pub use tables::{build_table, Row, Table, TableId, TableOptions};

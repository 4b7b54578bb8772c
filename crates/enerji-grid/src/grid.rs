//! A table instance: columns plus its own sort state.
//!
//! [`DataGrid`] is what a hosting view keeps per table. Records are not owned; they are
//! passed into every call, so the same data can back several grids.

use std::path::PathBuf;

use crate::column::ColumnSpec;
use crate::context::GridContext;
use crate::error::Result;
use crate::export::{serialize, ExportArtifact};
use crate::ordering::SortState;
use crate::record::FieldSource;
use crate::save::SaveTarget;
use crate::sort::sort;

/// A sortable, exportable table.
///
/// ```
/// use enerji_grid::{Column, ColumnSpec, DataGrid, GridContext, Language, Record, Render};
///
/// let columns = ColumnSpec::builder()
///     .column(Column::new("name", "Sector"))
///     .column(Column::new("value", "Consumption (TJ)").render(Render::Number))
///     .build();
/// let records = vec![
///     Record::new().with("name", "Services").with("value", 501104),
///     Record::new().with("name", "Industry").with("value", 1717368),
/// ];
///
/// let grid = DataGrid::new("Summary", columns);
/// let ctx = GridContext::new(Language::En).unwrap();
/// let rows = grid.rows(&records, &ctx);
/// assert_eq!(rows[0], vec!["Industry", "1,717,368"]);
/// ```
#[derive(Debug, Clone)]
pub struct DataGrid {
    title: String,
    columns: ColumnSpec,
    sort: Option<SortState>,
    file_name: Option<String>,
}

impl DataGrid {
    /// Creates a grid sorted by [`SortState::initial`].
    pub fn new(title: impl Into<String>, columns: ColumnSpec) -> Self {
        DataGrid {
            title: title.into(),
            columns,
            sort: Some(SortState::initial()),
            file_name: None,
        }
    }

    /// Set the suggested export file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    /// Header labels in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.labels()
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Export file name, if the table names one.
    pub fn export_file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Handles a click on the header of `key`.
    pub fn request_sort(&mut self, key: &str) {
        self.sort = Some(SortState::toggled(self.sort.as_ref(), key));
    }

    /// Drops back to source order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Records in display order.
    pub fn view<'a, T: FieldSource>(&self, records: &'a [T], ctx: &GridContext) -> Vec<&'a T> {
        sort(records, self.sort.as_ref(), ctx)
    }

    /// Display cells, one vector per record in display order, cells in column order.
    pub fn rows<T: FieldSource>(&self, records: &[T], ctx: &GridContext) -> Vec<Vec<String>> {
        self.view(records, ctx)
            .into_iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| column.display(record, ctx))
                    .collect()
            })
            .collect()
    }

    /// Serializes the records in display order.
    pub fn export<T: FieldSource>(
        &self,
        records: &[T],
        ctx: &GridContext,
    ) -> Result<ExportArtifact> {
        let view = self.view(records, ctx);
        let content = serialize(&view, &self.columns, ctx.language())?;
        log::debug!(
            "exported {} rows of '{}' ({} bytes)",
            view.len(),
            self.title,
            content.len()
        );
        Ok(ExportArtifact::csv(self.file_name.as_deref(), content))
    }

    /// Serializes the records in display order and hands them to `target`.
    pub fn export_to<T: FieldSource>(
        &self,
        records: &[T],
        ctx: &GridContext,
        target: &dyn SaveTarget,
    ) -> Result<PathBuf> {
        let artifact = self.export(records, ctx)?;
        target.save(&artifact)
    }
}

//! CSV export.
//!
//! The serializer writes what the data is, not what the screen shows: cells come from the
//! projected raw value of each column, so a percent badge exports as its number.

use serde::Serialize;

use crate::column::ColumnSpec;
use crate::error::Result;
use crate::language::Language;
use crate::record::FieldSource;

/// File name used when a table does not name its export.
pub const DEFAULT_FILE_NAME: &str = "veri_aktarimi.csv";

/// MIME type of the exported text.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Serializes records to CSV in the order given.
///
/// The first line holds the column labels. Every field is double-quoted with inner quotes
/// doubled, lines are joined with `\n` and there is no trailing newline.
///
/// ```
/// use enerji_grid::{serialize, Column, ColumnSpec, Language, Record};
///
/// let columns = ColumnSpec::builder()
///     .column(Column::new("name", "Name"))
///     .column(Column::new("value", "Value"))
///     .build();
/// let records = vec![Record::new().with("name", "A").with("value", 10)];
///
/// let csv = serialize(&records, &columns, Language::En).unwrap();
/// assert_eq!(csv, "\"Name\",\"Value\"\n\"A\",\"10\"");
/// ```
pub fn serialize<T: FieldSource>(
    records: &[T],
    columns: &ColumnSpec,
    language: Language,
) -> Result<String> {
    // The csv writer would quote an empty record as one empty field.
    if columns.is_empty() {
        return Ok("\n".repeat(records.len()));
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.labels())?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| column.raw(record, language).to_text())
            .collect();
        writer.write_record(&row)?;
    }

    let mut text = String::from_utf8(writer.into_inner()?)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// A serialized table ready to hand to a [`SaveTarget`](crate::SaveTarget).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of `content`.
    pub mime_type: String,
    /// CSV text.
    pub content: String,
}

impl ExportArtifact {
    /// Wraps CSV text, using [`DEFAULT_FILE_NAME`] when no name is given.
    pub fn csv(file_name: Option<&str>, content: String) -> Self {
        ExportArtifact {
            file_name: file_name.unwrap_or(DEFAULT_FILE_NAME).to_string(),
            mime_type: CSV_MIME_TYPE.to_string(),
            content,
        }
    }
}

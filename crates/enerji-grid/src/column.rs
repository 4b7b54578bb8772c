//! Column specifications.
//!
//! A [`ColumnSpec`] is the ordered list of [`Column`]s a table shows. Column order is
//! header order on screen and field order in the export.
//!
//! ```rust
//! use enerji_grid::{Column, ColumnSpec, Render};
//!
//! let spec = ColumnSpec::builder()
//!     .column(Column::new("code", "NACE Kodu").class_name("text-xs"))
//!     .column(Column::new("name", "Alt Sektör Adı"))
//!     .column(Column::new("value", "Pay (%)").render(Render::Percent))
//!     .build();
//!
//! assert_eq!(spec.labels(), vec!["NACE Kodu", "Alt Sektör Adı", "Pay (%)"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::context::GridContext;
use crate::language::Language;
use crate::project::{is_name_key, resolve_field};
use crate::record::FieldSource;
use crate::value::Value;

/// Signature of a custom cell formatter: raw value, whole record, context.
pub type RenderFn = dyn Fn(&Value<'_>, &dyn FieldSource, &GridContext) -> String + Send + Sync;

/// Display strategy for a column. Only affects what is shown, never what is exported.
#[derive(Clone)]
pub enum Render {
    /// Locale-grouped number: `1.717.368` / `1,717,368`.
    Number,
    /// The raw number as a percent: `%28.8` / `28.8%`.
    Percent,
    /// Share of a total to one decimal, as a percent. A non-positive total counts as 1.
    ShareOf(f64),
    /// Caller-supplied formatter.
    Custom(Arc<RenderFn>),
}

impl Render {
    /// Wraps a closure as a [`Render::Custom`] strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Value<'_>, &dyn FieldSource, &GridContext) -> String + Send + Sync + 'static,
    {
        Render::Custom(Arc::new(f))
    }

    /// Formats a raw value for display.
    pub fn apply(&self, value: &Value<'_>, record: &dyn FieldSource, ctx: &GridContext) -> String {
        match self {
            Render::Number => match value.as_number() {
                Some(n) => ctx.numbers().format(n.to_f64()),
                None => value.to_text(),
            },
            Render::Percent => {
                if value.is_none() {
                    String::new()
                } else {
                    ctx.percent(&value.to_text())
                }
            }
            Render::ShareOf(total) => match value.as_number() {
                Some(n) => {
                    let total = if *total > 0.0 { *total } else { 1.0 };
                    ctx.percent(&format!("{:.1}", n.to_f64() / total * 100.0))
                }
                None => String::new(),
            },
            Render::Custom(f) => f(value, record, ctx),
        }
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Render::Number => f.write_str("Number"),
            Render::Percent => f.write_str("Percent"),
            Render::ShareOf(total) => f.debug_tuple("ShareOf").field(total).finish(),
            Render::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One column of a table.
#[derive(Clone, Debug)]
pub struct Column {
    /// Field read from each record. `name` and `nameEN` are name aliases.
    pub key: String,
    /// Header text, already in the display language.
    pub label: String,
    /// Display strategy; raw text when unset.
    pub render: Option<Render>,
    /// Styling hint passed through to the presentation layer.
    pub class_name: Option<String>,
}

impl Column {
    /// Creates a column that shows the raw field value.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: label.into(),
            render: None,
            class_name: None,
        }
    }

    /// Set the display strategy.
    pub fn render(mut self, render: Render) -> Self {
        self.render = Some(render);
        self
    }

    /// Set the styling hint.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Returns `true` if this column shows the record's name.
    pub fn is_name(&self) -> bool {
        is_name_key(&self.key)
    }

    /// Raw value of this column for a record; what sorting and export see.
    pub fn raw<'a, T>(&self, record: &'a T, language: Language) -> Value<'a>
    where
        T: FieldSource + ?Sized,
    {
        resolve_field(record, &self.key, language)
    }

    /// Display text of this column for a record.
    ///
    /// Name columns always show the resolved name; other columns go through the render
    /// strategy when one is set.
    pub fn display<T: FieldSource>(&self, record: &T, ctx: &GridContext) -> String {
        let raw = self.raw(record, ctx.language());
        match &self.render {
            Some(render) if !self.is_name() => render.apply(&raw, record, ctx),
            _ => raw.to_text(),
        }
    }
}

/// Ordered list of columns for one table.
#[derive(Clone, Debug, Default)]
pub struct ColumnSpec {
    /// Column specifications.
    pub columns: Vec<Column>,
}

impl ColumnSpec {
    /// Create a spec builder.
    pub fn builder() -> ColumnSpecBuilder {
        ColumnSpecBuilder::default()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Header labels in column order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Field keys in column order. Keys may repeat.
    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    /// Check if any column reads the given key.
    pub fn has_key(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }
}

impl<'a> IntoIterator for &'a ColumnSpec {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Builder for constructing `ColumnSpec` instances.
#[derive(Clone, Debug, Default)]
pub struct ColumnSpecBuilder {
    columns: Vec<Column>,
}

impl ColumnSpecBuilder {
    /// Add a column to the table.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns from an iterator.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Build the `ColumnSpec` instance.
    pub fn build(self) -> ColumnSpec {
        ColumnSpec {
            columns: self.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn ctx(language: Language) -> GridContext {
        GridContext::new(language).unwrap()
    }

    fn subsector() -> Record {
        Record::new()
            .with("name", "Ana Metal Sanayi")
            .with("nameEN", "Basic Metal Industry")
            .with("value", 22.7)
            .with("code", "NACE 24")
    }

    #[test]
    fn builder_keeps_order() {
        let spec = ColumnSpec::builder()
            .column(Column::new("b", "B"))
            .columns([Column::new("a", "A"), Column::new("b", "B again")])
            .build();

        assert_eq!(spec.len(), 3);
        assert_eq!(spec.keys(), vec!["b", "a", "b"]);
        assert_eq!(spec.labels(), vec!["B", "A", "B again"]);
        assert!(spec.has_key("a"));
        assert!(!spec.has_key("value"));
    }

    #[test]
    fn percent_render_follows_language() {
        let record = subsector();
        let column = Column::new("value", "Pay (%)").render(Render::Percent);

        assert_eq!(column.display(&record, &ctx(Language::Tr)), "%22.7");
        assert_eq!(column.display(&record, &ctx(Language::En)), "22.7%");
    }

    #[test]
    fn number_render_groups_digits() {
        let record = Record::new().with("value", 1717368);
        let column = Column::new("value", "Tüketim (TJ)").render(Render::Number);

        assert_eq!(column.display(&record, &ctx(Language::Tr)), "1.717.368");
        assert_eq!(column.display(&record, &ctx(Language::En)), "1,717,368");
    }

    #[test]
    fn share_render_divides_by_total() {
        let record = Record::new().with("value", 1772);
        let column = Column::new("value", "Share").render(Render::ShareOf(5214.0));
        assert_eq!(column.display(&record, &ctx(Language::En)), "34.0%");

        let zero_total = Column::new("value", "Share").render(Render::ShareOf(0.0));
        let small = Record::new().with("value", 0.5);
        assert_eq!(zero_total.display(&small, &ctx(Language::Tr)), "%50.0");
    }

    #[test]
    fn custom_render_sees_whole_record() {
        let column = Column::new("value", "Pay").render(Render::custom(|value, record, _ctx| {
            format!("{} {}", record.field_value("code").to_text(), value.to_text())
        }));
        assert_eq!(column.display(&subsector(), &ctx(Language::Tr)), "NACE 24 22.7");
    }

    #[test]
    fn name_columns_ignore_render_and_resolve_language() {
        let column = Column::new("name", "Sector").render(Render::Percent);
        assert_eq!(
            column.display(&subsector(), &ctx(Language::En)),
            "Basic Metal Industry"
        );
        assert_eq!(
            column.raw(&subsector(), Language::Tr),
            Value::String("Ana Metal Sanayi")
        );
    }

    #[test]
    fn missing_field_displays_blank() {
        let column = Column::new("code", "NACE").render(Render::Percent);
        let record = Record::new().with("value", 1);
        assert_eq!(column.display(&record, &ctx(Language::En)), "");
    }

    #[test]
    fn render_debug_hides_closure() {
        assert_eq!(format!("{:?}", Render::ShareOf(2.0)), "ShareOf(2.0)");
        assert_eq!(
            format!("{:?}", Render::custom(|_, _, _| String::new())),
            "Custom(..)"
        );
    }
}

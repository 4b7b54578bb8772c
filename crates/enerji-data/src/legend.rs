//! Chart colours and interactive legends.
//!
//! Series get a palette colour by position before any filtering, so hiding one series
//! never recolours the others. Hidden series stay in the legend, greyed out.

use std::collections::BTreeMap;

use enerji_grid::{FieldSource, Language};

use crate::model::localized_name;

pub const PRIMARY: &str = "#0ea5e9";
pub const SECONDARY: &str = "#64748b";
pub const ACCENT: &str = "#f59e0b";
pub const SUCCESS: &str = "#10b981";
pub const PURPLE: &str = "#8b5cf6";

/// Colours assigned to chart series, cycling.
pub const CHART_PALETTE: &[&str] = &[PRIMARY, SUCCESS, ACCENT, PURPLE, "#f43f5e", "#82ca9d"];

/// Legend colour of a hidden series.
pub const MUTED_COLOR: &str = "#94a3b8";

/// Chart id of the transport road-vehicle pie.
pub const TRANSPORT_VEHICLES_CHART: &str = "transport-vehicles";

/// Chart id of the household fuel-preference bars.
pub const HOUSEHOLD_FUELS_CHART: &str = "household-fuels";

/// Palette colour for the series at `index`.
pub fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// One chart series: a data row with its display name and colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a, T> {
    pub item: &'a T,
    pub name: String,
    pub color: &'static str,
}

/// Pairs each item with its localized name and palette colour.
pub fn with_palette<T: FieldSource>(items: &[T], language: Language) -> Vec<Series<'_, T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Series {
            item,
            name: localized_name(item, language),
            color: palette_color(index),
        })
        .collect()
}

/// Series hidden by legend clicks, per chart.
///
/// Keys are the series' display names, so they belong to one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegendState {
    hidden: BTreeMap<String, Vec<String>>,
}

impl LegendState {
    pub fn new() -> Self {
        LegendState::default()
    }

    /// Handles a click on a legend entry: hides a visible series, shows a hidden one.
    pub fn toggle(&mut self, chart: &str, key: &str) {
        let hidden = self.hidden.entry(chart.to_string()).or_default();
        if let Some(pos) = hidden.iter().position(|k| k == key) {
            hidden.remove(pos);
        } else {
            hidden.push(key.to_string());
        }
    }

    pub fn is_hidden(&self, chart: &str, key: &str) -> bool {
        self.hidden(chart).iter().any(|k| k == key)
    }

    /// Hidden keys of one chart, in click order.
    pub fn hidden(&self, chart: &str) -> &[String] {
        self.hidden.get(chart).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The series a chart draws.
pub fn visible_series<'s, 'a, T>(
    series: &'s [Series<'a, T>],
    state: &LegendState,
    chart: &str,
) -> Vec<&'s Series<'a, T>> {
    series
        .iter()
        .filter(|s| !state.is_hidden(chart, &s.name))
        .collect()
}

/// One legend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub value: String,
    pub color: &'static str,
    pub hidden: bool,
}

/// Legend entries for every series, hidden ones in [`MUTED_COLOR`].
pub fn legend_entries<T>(series: &[Series<'_, T>], state: &LegendState, chart: &str) -> Vec<LegendEntry> {
    series
        .iter()
        .map(|s| {
            let hidden = state.is_hidden(chart, &s.name);
            LegendEntry {
                value: s.name.clone(),
                color: if hidden { MUTED_COLOR } else { s.color },
                hidden,
            }
        })
        .collect()
}

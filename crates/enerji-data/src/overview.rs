//! The overview page: one bar per sector, the pie of sector shares and the summary table.

use std::fmt;
use std::str::FromStr;

use enerji_grid::{FieldSource, Language, Number, Value};
use serde::Serialize;

use crate::error::DataError;
use crate::fuel::FuelFilter;
use crate::labels::labels;
use crate::legend::{ACCENT, PRIMARY, PURPLE, SUCCESS};
use crate::model::{MasterData, SectorData};

/// The four consuming sectors that have their own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Industry,
    Services,
    Transport,
    Household,
}

impl Sector {
    /// Overview order.
    pub const ALL: [Sector; 4] = [
        Sector::Industry,
        Sector::Household,
        Sector::Transport,
        Sector::Services,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Sector::Industry => "industry",
            Sector::Services => "services",
            Sector::Transport => "transport",
            Sector::Household => "household",
        }
    }

    /// Navigation label.
    pub fn label(self, language: Language) -> &'static str {
        let labels = labels(language);
        match self {
            Sector::Industry => labels.nav_industry,
            Sector::Services => labels.nav_services,
            Sector::Transport => labels.nav_transport,
            Sector::Household => labels.nav_household,
        }
    }

    /// Bar colour on the overview.
    pub fn fill(self) -> &'static str {
        match self {
            Sector::Industry => PRIMARY,
            Sector::Services => PURPLE,
            Sector::Transport => ACCENT,
            Sector::Household => SUCCESS,
        }
    }

    pub fn data(self, data: &MasterData) -> &SectorData {
        match self {
            Sector::Industry => &data.industry,
            Sector::Services => &data.services,
            Sector::Transport => &data.transport,
            Sector::Household => &data.household,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Sector {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.id() == s)
            .ok_or_else(|| DataError::UnknownSector(s.to_string()))
    }
}

/// Consumption of a sector under the fuel filter: the total, or the one fuel's value.
///
/// A sector that does not report the fuel counts as zero.
pub fn filtered_total(sector: &SectorData, filter: &FuelFilter) -> f64 {
    match filter.tr_name() {
        None => sector.total,
        Some(fuel) => sector.fuel(fuel).map_or(0.0, |f| f.value),
    }
}

/// One overview bar (or pie slice).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewRow {
    /// Already localized; `Sanayi (2024)` on bars, `Sanayi` on slices.
    pub name: String,
    pub value: f64,
    pub fill: &'static str,
    #[serde(rename = "sectorId")]
    pub sector: Sector,
}

impl FieldSource for OverviewRow {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "value" => Value::Number(Number::F64(self.value)),
            "fill" => Value::String(self.fill),
            "sectorId" => Value::String(self.sector.id()),
            _ => Value::None,
        }
    }
}

/// Overview bars in display order, named `"{label} ({year})"`.
pub fn overview_rows(data: &MasterData, language: Language, filter: &FuelFilter) -> Vec<OverviewRow> {
    Sector::ALL
        .into_iter()
        .map(|sector| {
            let sector_data = sector.data(data);
            OverviewRow {
                name: format!("{} ({})", sector.label(language), sector_data.year),
                value: filtered_total(sector_data, filter),
                fill: sector.fill(),
                sector,
            }
        })
        .collect()
}

/// The same rows for the pie, names cut to their first word.
pub fn pie_slices(rows: &[OverviewRow]) -> Vec<OverviewRow> {
    rows.iter()
        .map(|row| OverviewRow {
            name: first_word(&row.name).to_string(),
            ..row.clone()
        })
        .collect()
}

/// Sum of row values.
pub fn total(rows: &[OverviewRow]) -> f64 {
    rows.iter().map(|row| row.value).sum()
}

/// The sector page a chart label points at, matched on the label's first word.
pub fn sector_for_label(label: &str) -> Option<Sector> {
    let word = first_word(label);
    Sector::ALL.into_iter().find(|sector| {
        Language::ALL
            .into_iter()
            .any(|language| sector.label(language) == word)
    })
}

fn first_word(text: &str) -> &str {
    text.split(' ').next().unwrap_or(text)
}

//! Energy accounts (PEFA): final use by sector and by fuel.

use enerji_grid::Language;

use crate::model::{localized_name, PefaData, PefaFuel, PefaSector};

/// Total final use across sectors, PJ.
pub fn total_use(pefa: &PefaData) -> f64 {
    pefa.final_use_by_sector.iter().map(|s| s.value).sum()
}

/// The fuel picked on the fuel pie, by display name.
///
/// Picking the selected fuel again clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelSelection {
    selected: Option<String>,
}

impl FuelSelection {
    pub fn new() -> Self {
        FuelSelection::default()
    }

    /// A selection with `name` already picked.
    pub fn of(name: impl Into<String>) -> Self {
        FuelSelection {
            selected: Some(name.into()),
        }
    }

    /// Handles a click on a pie slice.
    pub fn toggle(&mut self, name: &str) {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_string());
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Fuel rows for the fuel-share table: all of them, or only the selected one.
///
/// The selection is compared against the names shown in `language`.
pub fn filtered_fuels<'a>(
    pefa: &'a PefaData,
    selection: &FuelSelection,
    language: Language,
) -> Vec<&'a PefaFuel> {
    pefa.final_use_by_fuel
        .iter()
        .filter(|fuel| match selection.selected() {
            Some(name) => localized_name(*fuel, language) == name,
            None => true,
        })
        .collect()
}

/// The fuel with the largest share of final use.
pub fn top_fuel(pefa: &PefaData) -> Option<&PefaFuel> {
    pefa.final_use_by_fuel
        .iter()
        .max_by(|a, b| a.share.total_cmp(&b.share))
}

/// The sector with the largest final use.
pub fn top_sector(pefa: &PefaData) -> Option<&PefaSector> {
    pefa.final_use_by_sector
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value))
}

//! Fuel options for the overview filter.

use std::fmt;
use std::str::FromStr;

use enerji_grid::Language;

use crate::error::DataError;

/// One entry of the fuel filter, named in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelOption {
    pub tr: &'static str,
    pub en: &'static str,
}

impl FuelOption {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Tr => self.tr,
            Language::En => self.en,
        }
    }

    fn matches(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.tr.to_lowercase() == text || self.en.to_lowercase() == text
    }
}

/// Name of the "no filter" option in the primary language.
pub const ALL_FUELS_TR: &str = "Tümü";

/// Every fuel the filter offers, "all" first.
pub const ALL_FUELS: &[FuelOption] = &[
    FuelOption { tr: ALL_FUELS_TR, en: "All" },
    FuelOption { tr: "Elektrik", en: "Electricity" },
    FuelOption { tr: "Doğal Gaz", en: "Natural Gas" },
    FuelOption { tr: "Petrol Ürünleri", en: "Petroleum Products" },
    FuelOption { tr: "LPG", en: "LPG" },
    FuelOption { tr: "Katı Fosil Yakıtlar", en: "Solid Fossil Fuels" },
    FuelOption { tr: "Kömür", en: "Coal" },
    FuelOption { tr: "Katı Biyokütle", en: "Solid Biomass" },
    FuelOption { tr: "Yenilenebilir/Diğer", en: "Renewable/Other" },
    FuelOption { tr: "Diğer", en: "Other" },
];

/// [`ALL_FUELS`] without repeated primary names, first occurrence kept.
pub fn unique_fuels() -> Vec<&'static FuelOption> {
    let mut seen: Vec<&str> = Vec::new();
    ALL_FUELS
        .iter()
        .filter(|option| {
            if seen.contains(&option.tr) {
                false
            } else {
                seen.push(option.tr);
                true
            }
        })
        .collect()
}

/// The overview's fuel filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FuelFilter {
    #[default]
    All,
    /// A single fuel, by primary name.
    Fuel(String),
}

impl FuelFilter {
    /// The primary fuel name, or `None` for [`FuelFilter::All`].
    pub fn tr_name(&self) -> Option<&str> {
        match self {
            FuelFilter::All => None,
            FuelFilter::Fuel(name) => Some(name),
        }
    }

    /// The filter's name in `language`. Unknown fuels keep their primary name.
    pub fn label(&self, language: Language) -> String {
        let tr = self.tr_name().unwrap_or(ALL_FUELS_TR);
        unique_fuels()
            .into_iter()
            .find(|option| option.tr == tr)
            .map_or_else(|| tr.to_string(), |option| option.label(language).to_string())
    }
}

impl FromStr for FuelFilter {
    type Err = DataError;

    /// Accepts a fuel name in either language, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = unique_fuels()
            .into_iter()
            .find(|option| option.matches(s))
            .ok_or_else(|| DataError::UnknownFuel(s.to_string()))?;
        if option.tr == ALL_FUELS_TR {
            Ok(FuelFilter::All)
        } else {
            Ok(FuelFilter::Fuel(option.tr.to_string()))
        }
    }
}

impl fmt::Display for FuelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tr_name().unwrap_or(ALL_FUELS_TR))
    }
}

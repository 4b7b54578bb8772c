//! Typed dataset rows.
//!
//! Field names follow the published JSON (`nameEN`, `subSectors`, ...), and every row type
//! exposes the same names to the grid through [`FieldSource`].

use enerji_grid::{resolve_field, FieldSource, Language, Number, Value, PRIMARY_NAME_KEY};
use serde::{Deserialize, Serialize};

/// The whole dashboard dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterData {
    pub industry: SectorData,
    pub services: SectorData,
    pub transport: SectorData,
    pub household: SectorData,
    pub pefa: PefaData,
}

/// Final energy consumption of one sector, in TJ.
///
/// Only `total`, `year` and `fuel_mix` are common to every sector; the rest is whatever
/// breakdown the sector's bulletin publishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorData {
    pub total: f64,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_sectors: Vec<NamedValue>,
    /// Absolute consumption per fuel, TJ.
    pub fuel_mix: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aviation_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rail_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub road_fuels: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub road_vehicles: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uses: Vec<NamedValue>,
    /// Fuel shares, percent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fuels: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_centers: Option<Measure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aviation_split: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rail_split: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heating_fuels: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_sector: Option<FocusSector>,
}

impl SectorData {
    /// The fuel-mix entry whose primary name is `tr_name`.
    pub fn fuel(&self, tr_name: &str) -> Option<&NamedValue> {
        self.fuel_mix.iter().find(|f| f.name == tr_name)
    }
}

/// A bilingual label with a value: a sub-sector share, a fuel's consumption, a vehicle share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    pub value: f64,
    /// NACE activity code, where the bulletin gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, name_en: impl Into<String>, value: f64) -> Self {
        NamedValue {
            name: name.into(),
            name_en: name_en.into(),
            value,
            code: None,
        }
    }

    /// Set the NACE code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl FieldSource for NamedValue {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "nameEN" => Value::String(&self.name_en),
            "value" => Value::Number(Number::F64(self.value)),
            "code" => self.code.as_deref().map_or(Value::None, Value::String),
            _ => Value::None,
        }
    }
}

/// A single quantity with its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub unit: String,
}

/// The most energy-intensive sub-sector and its fuel shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSector {
    pub name: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    pub fuel_mix: Vec<NamedValue>,
}

/// Physical energy flow accounts, in PJ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PefaData {
    pub year: u16,
    pub final_use_by_sector: Vec<PefaSector>,
    pub final_use_by_fuel: Vec<PefaFuel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PefaSector {
    pub name: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    pub value: f64,
    pub fill: String,
}

impl FieldSource for PefaSector {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "nameEN" => Value::String(&self.name_en),
            "value" => Value::Number(Number::F64(self.value)),
            "fill" => Value::String(&self.fill),
            _ => Value::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PefaFuel {
    pub name: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    pub value: f64,
    /// Share of total final use, percent.
    pub share: f64,
    pub fill: String,
}

impl FieldSource for PefaFuel {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "nameEN" => Value::String(&self.name_en),
            "value" => Value::Number(Number::F64(self.value)),
            "share" => Value::Number(Number::F64(self.share)),
            "fill" => Value::String(&self.fill),
            _ => Value::None,
        }
    }
}

/// The display name of any row in the given language, with the usual fallback.
pub fn localized_name<T: FieldSource + ?Sized>(item: &T, language: Language) -> String {
    resolve_field(item, PRIMARY_NAME_KEY, language).to_text()
}

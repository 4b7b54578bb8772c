//! The dashboard's data tables.
//!
//! Each [`TableId`] names one table as the dashboard lays it out: which rows, which
//! columns and render strategies, its title and its export file name.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use enerji_grid::{
    Column, ColumnSpec, DataGrid, ExportArtifact, FieldSource, GridContext, Language, Render,
    SaveTarget, Value,
};

use crate::error::{DataError, Result};
use crate::fuel::FuelFilter;
use crate::labels::{labels, TableLabels};
use crate::model::{MasterData, NamedValue, PefaFuel, PefaSector};
use crate::overview::{overview_rows, total, OverviewRow};
use crate::pefa::{filtered_fuels, total_use, FuelSelection};

const CODE_CLASS: &str = "text-slate-400 text-xs";
const NAME_CLASS: &str = "font-medium";
const NUMBER_CLASS: &str = "font-mono";

/// One of the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Overview,
    IndustrySubsectors,
    IndustryFuels,
    ServicesActivities,
    ServicesFuels,
    TransportVehicles,
    TransportFuels,
    HouseholdPurposes,
    HouseholdFuels,
    PefaSectors,
    PefaFuels,
}

impl TableId {
    /// Page order.
    pub const ALL: [TableId; 11] = [
        TableId::Overview,
        TableId::IndustrySubsectors,
        TableId::IndustryFuels,
        TableId::ServicesActivities,
        TableId::ServicesFuels,
        TableId::TransportVehicles,
        TableId::TransportFuels,
        TableId::HouseholdPurposes,
        TableId::HouseholdFuels,
        TableId::PefaSectors,
        TableId::PefaFuels,
    ];

    /// Stable id used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            TableId::Overview => "overview",
            TableId::IndustrySubsectors => "industry-subsectors",
            TableId::IndustryFuels => "industry-fuels",
            TableId::ServicesActivities => "services-activities",
            TableId::ServicesFuels => "services-fuels",
            TableId::TransportVehicles => "transport-vehicles",
            TableId::TransportFuels => "transport-fuels",
            TableId::HouseholdPurposes => "household-purposes",
            TableId::HouseholdFuels => "household-fuels",
            TableId::PefaSectors => "pefa-sectors",
            TableId::PefaFuels => "pefa-fuels",
        }
    }

    /// Export file name. Sector tables carry the language code, PEFA tables do not.
    pub fn file_name(self, language: Language) -> String {
        let stem = match self {
            TableId::Overview => "genel_bakis_ozet",
            TableId::IndustrySubsectors => "sanayi_alt_sektorler",
            TableId::IndustryFuels => "sanayi_yakit_paylari",
            TableId::ServicesActivities => "hizmet_alt_sektorler",
            TableId::ServicesFuels => "hizmet_yakit_paylari",
            TableId::TransportVehicles => "ulasim_arac_tipleri",
            TableId::TransportFuels => "ulasim_yakit_paylari",
            TableId::HouseholdPurposes => "hanehalki_amaclar",
            TableId::HouseholdFuels => "hanehalki_yakitlar",
            TableId::PefaSectors => return "pefa_sektor_tuketim.csv".to_string(),
            TableId::PefaFuels => return "pefa_yakit_paylari.csv".to_string(),
        };
        format!("{stem}_{}.csv", language.code())
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableId {
    type Err = DataError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TableId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DataError::UnknownTable(s.to_string()))
    }
}

/// A row of any dashboard table.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Named(NamedValue),
    Overview(OverviewRow),
    PefaSector(PefaSector),
    PefaFuel(PefaFuel),
}

impl FieldSource for Row {
    fn field_value(&self, field: &str) -> Value<'_> {
        match self {
            Row::Named(row) => row.field_value(field),
            Row::Overview(row) => row.field_value(field),
            Row::PefaSector(row) => row.field_value(field),
            Row::PefaFuel(row) => row.field_value(field),
        }
    }
}

/// Page state that changes what a table holds.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Overview fuel filter.
    pub fuel: FuelFilter,
    /// PEFA fuel pie selection.
    pub selected_fuel: FuelSelection,
}

/// A built table: its grid and the rows it shows.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: TableId,
    pub grid: DataGrid,
    pub records: Vec<Row>,
}

impl Table {
    pub fn title(&self) -> &str {
        self.grid.title()
    }

    /// Display cells in display order.
    pub fn rows(&self, ctx: &GridContext) -> Vec<Vec<String>> {
        self.grid.rows(&self.records, ctx)
    }

    /// Record count line in the context's language.
    pub fn count_label(&self, language: Language) -> String {
        labels(language).record_count(self.records.len())
    }

    pub fn export(&self, ctx: &GridContext) -> Result<ExportArtifact> {
        Ok(self.grid.export(&self.records, ctx)?)
    }

    pub fn export_to(&self, ctx: &GridContext, target: &dyn SaveTarget) -> Result<PathBuf> {
        Ok(self.grid.export_to(&self.records, ctx, target)?)
    }
}

/// Builds a table the way its dashboard page configures it.
pub fn build_table(
    id: TableId,
    data: &MasterData,
    language: Language,
    options: &TableOptions,
) -> Table {
    let t = labels(language);
    let name_key = language.name_key();

    let (title, columns, records) = match id {
        TableId::Overview => {
            let rows = overview_rows(data, language, &options.fuel);
            let columns = share_columns("name", t.col_sector, t.col_consumption, t.col_share, total(&rows));
            let title = t.table_summary(&options.fuel.label(language));
            let records: Vec<Row> = rows.into_iter().map(Row::Overview).collect();
            (title, columns, records)
        }
        TableId::IndustrySubsectors => (
            format!("{} {} ({})", t.nav_industry, t.col_subsector, t.unit_pay),
            subsector_columns(t, name_key, t.col_subsector),
            named(&data.industry.sub_sectors),
        ),
        TableId::IndustryFuels => (
            format!("{} {} ({})", t.nav_industry, t.col_fuel_source, t.unit_tj),
            consumption_columns(t, name_key, t.col_fuel_source),
            named(&data.industry.fuel_mix),
        ),
        TableId::ServicesActivities => (
            format!("{} {} ({})", t.nav_services, t.col_activity, t.unit_pay),
            subsector_columns(t, name_key, t.col_activity),
            named(&data.services.sub_sectors),
        ),
        TableId::ServicesFuels => (
            format!("{} {} ({})", t.nav_services, t.col_fuel_source, t.unit_tj),
            consumption_columns(t, name_key, t.col_fuel_source),
            named(&data.services.fuel_mix),
        ),
        TableId::TransportVehicles => (
            format!("{} {} ({})", t.nav_transport, t.col_vehicle_type, t.unit_pay),
            percent_columns(t, name_key, t.col_vehicle_type, "value"),
            named(&data.transport.road_vehicles),
        ),
        TableId::TransportFuels => (
            format!("{} ({})", t.all_transport_fuels, t.unit_tj),
            consumption_columns(t, name_key, t.col_fuel_type),
            named(&data.transport.fuel_mix),
        ),
        TableId::HouseholdPurposes => (
            format!("{} {} ({})", t.nav_household, t.col_purpose, t.unit_pay),
            percent_columns(t, name_key, t.col_purpose, "value"),
            named(&data.household.uses),
        ),
        TableId::HouseholdFuels => (
            format!("{} {} ({})", t.nav_household, t.col_fuel_type, t.unit_tj),
            consumption_columns(t, name_key, t.col_fuel_type),
            named(&data.household.fuel_mix),
        ),
        TableId::PefaSectors => {
            let consumption = format!("{} (PJ)", t.col_consumption);
            let columns = share_columns(name_key, t.col_sector, &consumption, t.col_share, total_use(&data.pefa));
            let records: Vec<Row> = data
                .pefa
                .final_use_by_sector
                .iter()
                .cloned()
                .map(Row::PefaSector)
                .collect();
            (format!("{} (PJ)", t.pefa_table1), columns, records)
        }
        TableId::PefaFuels => {
            let records: Vec<Row> = filtered_fuels(&data.pefa, &options.selected_fuel, language)
                .into_iter()
                .cloned()
                .map(Row::PefaFuel)
                .collect();
            (
                format!("{} (%)", t.pefa_table2),
                percent_columns(t, name_key, t.col_fuel_type, "share"),
                records,
            )
        }
    };

    log::debug!("built table {id} with {} rows", records.len());
    Table {
        id,
        grid: DataGrid::new(title, columns).file_name(id.file_name(language)),
        records,
    }
}

fn named(rows: &[NamedValue]) -> Vec<Row> {
    rows.iter().cloned().map(Row::Named).collect()
}

/// Name, absolute value, and the value as a share of `total`.
fn share_columns(name_key: &str, name: &str, value: &str, share: &str, total: f64) -> ColumnSpec {
    ColumnSpec::builder()
        .column(Column::new(name_key, name).class_name(NAME_CLASS))
        .column(
            Column::new("value", value)
                .render(Render::Number)
                .class_name(NUMBER_CLASS),
        )
        .column(Column::new("value", share).render(Render::ShareOf(total)))
        .build()
}

/// NACE code, name, percent share.
fn subsector_columns(t: &TableLabels, name_key: &str, name: &str) -> ColumnSpec {
    ColumnSpec::builder()
        .column(Column::new("code", t.col_nace).class_name(CODE_CLASS))
        .column(Column::new(name_key, name).class_name(NAME_CLASS))
        .column(Column::new("value", t.unit_pay).render(Render::Percent))
        .build()
}

/// Name and absolute consumption in TJ.
fn consumption_columns(t: &TableLabels, name_key: &str, name: &str) -> ColumnSpec {
    ColumnSpec::builder()
        .column(Column::new(name_key, name).class_name(NAME_CLASS))
        .column(
            Column::new("value", t.col_consumption)
                .render(Render::Number)
                .class_name(NUMBER_CLASS),
        )
        .build()
}

/// Name and a percent share read from `key`.
fn percent_columns(t: &TableLabels, name_key: &str, name: &str, key: &str) -> ColumnSpec {
    ColumnSpec::builder()
        .column(Column::new(name_key, name).class_name(NAME_CLASS))
        .column(Column::new(key, t.unit_pay).render(Render::Percent))
        .build()
}

//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use enerji_data::{FuelFilter, TableId};
use enerji_grid::Language;

/// Energy statistics tables in the terminal.
#[derive(Debug, Parser)]
#[command(name = "enerji")]
#[command(version)]
#[command(about = "Browse and export the energy statistics tables")]
pub struct Cli {
    /// Display language: tr or en
    #[arg(short, long, global = true, env = "ENERJI_LANG", default_value = "tr")]
    pub lang: Language,

    /// Read the dataset from a JSON file instead of the built-in one
    #[arg(long, global = true, env = "ENERJI_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Log sorting and export details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the table ids
    Tables,

    /// Print a table
    Show(TableArgs),

    /// Write a table as CSV
    Export(ExportArgs),

    /// List the overview fuel filter options
    Fuels,

    /// Print chart series and their legend
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Table id (see `enerji tables`)
    pub table: TableId,

    /// Click a column header by key; repeat to click again
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Vec<String>,

    /// Start from source order instead of the default sort
    #[arg(long)]
    pub unsorted: bool,

    /// Overview fuel filter, in either language
    #[arg(long, value_name = "FUEL", default_value = "Tümü")]
    pub fuel: FuelFilter,

    /// Fuel picked on the PEFA fuel pie, by display name
    #[arg(long, value_name = "NAME")]
    pub selected_fuel: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Directory to write into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the CSV instead of writing a file
    #[arg(long, conflicts_with = "dir")]
    pub stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartId {
    /// Sector totals on the overview
    Overview,
    /// Road vehicle shares
    TransportVehicles,
    /// Household fuel preferences
    HouseholdFuels,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    pub chart: ChartId,

    /// Hide a series by its display name, as a legend click would
    #[arg(long = "hide", value_name = "NAME")]
    pub hide: Vec<String>,

    /// Overview fuel filter, in either language
    #[arg(long, value_name = "FUEL", default_value = "Tümü")]
    pub fuel: FuelFilter,
}

//! Command handlers. Each writes its output to the given writer.

use std::borrow::Cow;
use std::fs;
use std::io::Write;

use anyhow::{bail, Context, Result};
use enerji_data::{
    build_table, legend_entries, overview_rows, pie_slices, sector_for_label, total,
    unique_fuels, visible_series, with_palette, FuelSelection, LegendState, MasterData, Table,
    TableId, TableOptions, HOUSEHOLD_FUELS_CHART, TRANSPORT_VEHICLES_CHART,
};
use enerji_grid::{DirectorySink, GridContext, Language, Render};

use crate::cli::{ChartArgs, ChartId, Cli, Command, ExportArgs, TableArgs};
use crate::render::render_table;

/// Runs the parsed command line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let data = load_data(cli)?;
    let ctx = GridContext::new(cli.lang).context("could not set up locale data")?;

    match &cli.command {
        Command::Tables => list_tables(&data, &ctx, out),
        Command::Show(args) => show(&data, &ctx, args, out),
        Command::Export(args) => export(&data, &ctx, args, out),
        Command::Fuels => list_fuels(cli.lang, out),
        Command::Chart(args) => chart(&data, &ctx, args, out),
    }
}

fn load_data(cli: &Cli) -> Result<Cow<'static, MasterData>> {
    match &cli.data {
        Some(path) => {
            log::debug!("loading dataset from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            let data = MasterData::from_json_str(&json)
                .with_context(|| format!("could not load {}", path.display()))?;
            Ok(Cow::Owned(data))
        }
        None => Ok(Cow::Borrowed(MasterData::embedded()?)),
    }
}

fn list_tables(data: &MasterData, ctx: &GridContext, out: &mut dyn Write) -> Result<()> {
    let options = TableOptions::default();
    let width = TableId::ALL.iter().map(|id| id.as_str().len()).max().unwrap_or(0);
    for id in TableId::ALL {
        let table = build_table(id, data, ctx.language(), &options);
        writeln!(out, "{:<width$}  {}", id.as_str(), table.title())?;
    }
    Ok(())
}

/// Builds the table and replays the header clicks.
fn prepare(data: &MasterData, ctx: &GridContext, args: &TableArgs) -> Table {
    let options = TableOptions {
        fuel: args.fuel.clone(),
        selected_fuel: args
            .selected_fuel
            .as_deref()
            .map_or_else(FuelSelection::new, FuelSelection::of),
    };
    let mut table = build_table(args.table, data, ctx.language(), &options);
    if args.unsorted {
        table.grid.clear_sort();
    }
    for key in &args.sort {
        if !table.grid.columns().has_key(key) {
            log::warn!("table {} has no column '{key}'", args.table);
        }
        table.grid.request_sort(key);
    }
    table
}

fn show(data: &MasterData, ctx: &GridContext, args: &TableArgs, out: &mut dyn Write) -> Result<()> {
    let table = prepare(data, ctx, args);
    write!(out, "{}", render_table(&table, ctx))?;
    Ok(())
}

fn export(data: &MasterData, ctx: &GridContext, args: &ExportArgs, out: &mut dyn Write) -> Result<()> {
    let table = prepare(data, ctx, &args.table);
    if args.stdout {
        let artifact = table.export(ctx)?;
        writeln!(out, "{}", artifact.content)?;
        return Ok(());
    }

    let sink = DirectorySink::new(&args.dir);
    let path = table
        .export_to(ctx, &sink)
        .with_context(|| format!("could not export {}", args.table.table))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn list_fuels(language: Language, out: &mut dyn Write) -> Result<()> {
    for option in unique_fuels() {
        let other = match language {
            Language::Tr => option.en,
            Language::En => option.tr,
        };
        writeln!(out, "{} ({other})", option.label(language))?;
    }
    Ok(())
}

fn chart(data: &MasterData, ctx: &GridContext, args: &ChartArgs, out: &mut dyn Write) -> Result<()> {
    let language = ctx.language();
    let (id, items) = match args.chart {
        ChartId::Overview => return overview_chart(data, ctx, args, out),
        ChartId::TransportVehicles => (TRANSPORT_VEHICLES_CHART, &data.transport.road_vehicles),
        ChartId::HouseholdFuels => (HOUSEHOLD_FUELS_CHART, &data.household.fuel_mix),
    };

    let mut legend = LegendState::new();
    for key in &args.hide {
        legend.toggle(id, key);
    }
    let series = with_palette(items, language);

    for entry in legend_entries(&series, &legend, id) {
        let marker = if entry.hidden { " (hidden)" } else { "" };
        writeln!(out, "{} {}{marker}", entry.color, entry.value)?;
    }

    let visible = visible_series(&series, &legend, id);
    let shown: f64 = visible.iter().map(|s| s.item.value).sum();
    let value = if id == HOUSEHOLD_FUELS_CHART {
        ctx.numbers().format(shown)
    } else {
        ctx.percent(&format!("{shown:.1}"))
    };
    writeln!(out, "{}/{} → {value}", visible.len(), series.len())?;
    Ok(())
}

fn overview_chart(data: &MasterData, ctx: &GridContext, args: &ChartArgs, out: &mut dyn Write) -> Result<()> {
    if let Some(name) = args.hide.first() {
        bail!("the overview chart has no legend to hide '{name}' from");
    }
    let rows = overview_rows(data, ctx.language(), &args.fuel);
    let sum = total(&rows);
    let share = Render::ShareOf(sum);

    for slice in pie_slices(&rows) {
        let target = sector_for_label(&slice.name).map_or("-", |s| s.id());
        let value = enerji_grid::Value::Number(slice.value.into());
        writeln!(
            out,
            "{} {:<10} {:>12} {:>7}  → {target}",
            slice.fill,
            slice.name,
            ctx.numbers().format(slice.value),
            share.apply(&value, &slice, ctx),
        )?;
    }
    writeln!(out, "{}", ctx.numbers().format(sum))?;
    Ok(())
}

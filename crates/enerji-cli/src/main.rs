use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use enerji_cli::{init_logging, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose).context("could not install the logger")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

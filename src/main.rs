mod batch_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod invoke_cmd;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::MayaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MayaConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Invoke(args) => invoke_cmd::run(args, &config),
        Command::Batch(args) => batch_cmd::run(args, &config),
    }
}

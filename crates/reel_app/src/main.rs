mod cli;
mod commands;
mod config;
mod logging;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log, cli.verbose);
    let settings = config::load_settings(cli.config.as_deref())?;
    commands::run(cli.command, &settings)
}

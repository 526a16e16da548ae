//! Apksweep CLI - sweep unwanted packages off a connected Android device.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Sweep(args) => commands::sweep::execute(args, &*formatter, cli.quiet, cli.json),
        cli::Commands::Devices(args) => commands::devices::execute(args, &*formatter),
        cli::Commands::Inspectors => commands::inspectors::execute(&*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}

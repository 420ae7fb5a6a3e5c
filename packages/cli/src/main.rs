mod catalog;
mod commands;

use clap::{Parser, Subcommand};
use commands::{export, ExportArgs};

/// Remote widget asset generator
#[derive(Parser, Debug)]
#[command(name = "rfw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the catalog sample as .rfwtxt and .json assets
    Export(ExportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export(args) => export(args),
    }
}

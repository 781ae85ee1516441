use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::RunMode;
use error::CliResult;

#[derive(Parser)]
#[command(name = "claimtree")]
#[command(about = "Claimtree CLI - Merkle claim artifacts for token allocations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a claim artifact from an allocation list
    Generate {
        /// Allocation input file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Artifact output path
        #[arg(short, long, default_value = "claims.json")]
        output: PathBuf,

        /// Write the artifact instead of previewing it
        #[arg(long)]
        persist: bool,
    },

    /// Re-verify every claim in a persisted artifact
    Verify {
        /// Claim artifact path
        artifact: PathBuf,
    },

    /// Look up and re-verify one address's claim
    Lookup {
        /// Claim artifact path
        artifact: PathBuf,

        /// Recipient address (case-insensitive)
        address: String,
    },
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            persist,
        } => {
            let mode = RunMode::resolve(persist);
            commands::generate::execute(input, output, mode)
        }

        Commands::Verify { artifact } => commands::verify::execute(artifact),

        Commands::Lookup { artifact, address } => commands::lookup::execute(artifact, address),
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}

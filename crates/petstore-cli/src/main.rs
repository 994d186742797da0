//! Petstore CLI
//!
//! Command-line interface for petstore maintenance tasks

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "petstore")]
#[command(about = "Petstore - pet database maintenance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reset the pets table and repopulate it with random sample data
    Seed(commands::seed::SeedArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

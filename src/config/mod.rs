pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "worksheet-gen")]
#[command(about = "Printable addition and number-reading worksheets as A4 PNG images")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output directory (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Seed for reproducible sheets
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print the generated problems as JSON without writing images
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: SheetCommand,
}

/// Positional values are kept raw so invalid input can fall back to defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum SheetCommand {
    /// Addition practice: 30 problems, difficulty 1-4 (default 3)
    Addition {
        #[arg(allow_hyphen_values = true)]
        difficulty: Option<String>,
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,
    },
    /// Number reading practice: 36 problems, 1-4 digits (default 3)
    Reading {
        #[arg(allow_hyphen_values = true)]
        digits: Option<String>,
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,
    },
}

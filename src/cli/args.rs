//! CLI argument definitions using clap
//!
//! Commands:
//! - aerofacet search --config <path>
//! - aerofacet stats --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aerofacet - faceted search over a fixed item catalog
#[derive(Parser, Debug)]
#[command(name = "aerofacet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the index and answer search requests read from stdin, one JSON object per line
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./aerofacet.json")]
        config: PathBuf,
    },

    /// Build the index and print its statistics
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./aerofacet.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI parse: clap types for Propgate. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Propgate CLI - Conditional property interception for project configuration
#[derive(Parser)]
#[command(name = "propgate")]
#[command(about = "Conditional property interception for project configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the effective value of a property
    Get {
        /// Property name (case-sensitive)
        name: String,
    },
    /// Assign a property value
    Set {
        /// Property name (case-sensitive)
        name: String,
        /// New value
        value: String,
    },
    /// Show stored and effective property values
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

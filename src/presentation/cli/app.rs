use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitepulse: page experience and on-page SEO monitor
///
/// Measures Core Web Vitals from recorded page captures, extracts SEO
/// signals, and raises alerts when a page crosses its thresholds.
#[derive(Parser, Debug)]
#[command(name = "sitepulse")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one monitoring cycle against a page capture
    #[command(alias = "sc")]
    Scan {
        /// Page capture file (JSON)
        capture: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Append the performance report
        #[arg(long)]
        report: bool,
    },

    /// Show on-page SEO signals only
    #[command(alias = "s")]
    Signals {
        /// Page capture file (JSON)
        capture: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Collect snapshots repeatedly and report on exit
    #[command(alias = "w")]
    Watch {
        /// Page capture file (JSON)
        capture: PathBuf,

        /// Seconds between cycles (default: config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many cycles (default: until Ctrl+C)
        #[arg(short = 'n', long)]
        cycles: Option<u64>,
    },
}

//! CLI argument parsing for graphwalk
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --strategy

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::config::Strategy;
pub use output::OutputFormat;
use parse::parse_strategy;

/// Graphwalk - connected components, depth-first paths and grid islands
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Traversal strategy, overriding the configured default
    #[arg(long, global = true, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count connected components of a graph file
    Components {
        /// Graph file (JSON, `kind` = list or matrix)
        file: PathBuf,
    },

    /// Find the depth-first shortest path between two vertices
    Path {
        /// Graph file (JSON, `kind` = list or matrix)
        file: PathBuf,

        /// Source vertex index
        from: usize,

        /// Destination vertex index
        to: usize,

        /// Use Dijkstra for the true minimum instead of the memoized DFS
        #[arg(long)]
        dijkstra: bool,
    },

    /// Count islands of land in a grid file
    Islands {
        /// Grid file (JSON 2-D array of -1, 0, 1)
        file: PathBuf,

        /// Track visits in a side table instead of marking the grid
        #[arg(long)]
        preserve: bool,
    },
}

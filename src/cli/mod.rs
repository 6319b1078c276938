//! CLI argument parsing for graphsteps
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --locale. One subcommand per algorithm.

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::TraceArgs;
pub use graphsteps_core::format::OutputFormat;
use graphsteps_core::graph::{Algorithm, Locale};
use parse::{parse_format, parse_locale};

/// graphsteps - step-by-step traces of classical graph algorithms
#[derive(Parser, Debug)]
#[command(name = "graphsteps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "GRAPHSTEPS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the graphsteps config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Narration language (en, pl), overriding the configured one
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level graphsteps commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search
    Bfs(TraceArgs),

    /// Depth-first search
    Dfs(TraceArgs),

    /// Kruskal's minimum spanning tree
    Kruskal(TraceArgs),

    /// Prim/Dijkstra minimum spanning tree
    PrimDijkstra(TraceArgs),

    /// Dijkstra's shortest paths
    Dijkstra(TraceArgs),

    /// Bellman-Ford shortest paths
    BellmanFord(TraceArgs),
}

impl Commands {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Commands::Bfs(_) => Algorithm::Bfs,
            Commands::Dfs(_) => Algorithm::Dfs,
            Commands::Kruskal(_) => Algorithm::Kruskal,
            Commands::PrimDijkstra(_) => Algorithm::PrimDijkstra,
            Commands::Dijkstra(_) => Algorithm::Dijkstra,
            Commands::BellmanFord(_) => Algorithm::BellmanFord,
        }
    }

    pub fn args(&self) -> &TraceArgs {
        match self {
            Commands::Bfs(args)
            | Commands::Dfs(args)
            | Commands::Kruskal(args)
            | Commands::PrimDijkstra(args)
            | Commands::Dijkstra(args)
            | Commands::BellmanFord(args) => args,
        }
    }
}

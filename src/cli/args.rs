//! Trace command argument structures

use std::path::PathBuf;

use clap::Args;

use graphsteps_core::graph::Vertex;

/// Arguments shared by every algorithm subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct TraceArgs {
    /// JSON request file (`-` reads stdin)
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    /// Start vertex, overriding `start_vertex` in the request
    #[arg(long, short)]
    pub start: Option<Vertex>,
}

impl TraceArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

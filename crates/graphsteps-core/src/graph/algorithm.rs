//! Algorithm selection and dispatch

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::algos::{bellman_ford, dijkstra, kruskal, prim, search};
use super::frontier::{FifoFrontier, LifoFrontier};
use super::steps::StepTrace;
use super::types::{GraphInput, Vertex};
use super::validate::{validate_start, validate_structure, validate_weights};
use crate::error::{GraphStepsError, Result};
use crate::trace_time;

/// Traceable algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Kruskal,
    PrimDijkstra,
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Kruskal,
        Algorithm::PrimDijkstra,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Kruskal => "kruskal",
            Algorithm::PrimDijkstra => "prim-dijkstra",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }

    /// Whether the algorithm reads edge weights
    pub fn is_weighted(&self) -> bool {
        !matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }

    /// Whether the algorithm grows from a start vertex
    pub fn needs_start(&self) -> bool {
        !matches!(self, Algorithm::Kruskal)
    }
}

impl FromStr for Algorithm {
    type Err = GraphStepsError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| GraphStepsError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Limits applied before a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceOptions {
    pub max_vertices: Option<usize>,
}

/// Validate `input` for `algorithm` and run it
///
/// `start` is ignored by algorithms that do not need one.
pub fn run_algorithm(
    algorithm: Algorithm,
    input: &GraphInput,
    start: Option<Vertex>,
) -> Result<StepTrace> {
    run_algorithm_with(algorithm, input, start, &TraceOptions::default())
}

/// [`run_algorithm`] with explicit limits
#[tracing::instrument(skip(input, options), fields(vertices = input.vertex_count()))]
pub fn run_algorithm_with(
    algorithm: Algorithm,
    input: &GraphInput,
    start: Option<Vertex>,
    options: &TraceOptions,
) -> Result<StepTrace> {
    let begin = Instant::now();
    validate_structure(input, options.max_vertices)?;
    let start = if algorithm.needs_start() {
        validate_start(input, start)?
    } else {
        0
    };

    tracing::debug!(start, "running algorithm");
    let trace = match algorithm {
        Algorithm::Bfs => StepTrace::Search(search::run_search(input, start, FifoFrontier::new())),
        Algorithm::Dfs => StepTrace::Search(search::run_search(input, start, LifoFrontier::new())),
        Algorithm::Kruskal => {
            let graph = validate_weights(input)?;
            StepTrace::SpanningTree(kruskal::run_kruskal(&graph))
        }
        Algorithm::PrimDijkstra => {
            let graph = validate_weights(input)?;
            StepTrace::SpanningTree(prim::run_prim_dijkstra(&graph, start))
        }
        Algorithm::Dijkstra => {
            let graph = validate_weights(input)?;
            StepTrace::Dijkstra(dijkstra::run_dijkstra(&graph, start))
        }
        Algorithm::BellmanFord => {
            let graph = validate_weights(input)?;
            StepTrace::BellmanFord(bellman_ford::run_bellman_ford(&graph, start))
        }
    };

    tracing::debug!(steps = trace.len(), "algorithm finished");
    trace_time!(begin, "run_algorithm");
    Ok(trace)
}

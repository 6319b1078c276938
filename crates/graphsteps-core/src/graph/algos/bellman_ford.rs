use std::collections::BTreeSet;
use std::time::Instant;

use super::shared::seed_from_start;
use crate::error::Result;
use crate::graph::narration::Narration;
use crate::graph::steps::{BellmanFordStep, StepRecorder};
use crate::graph::types::{Cost, EdgeKey, GraphInput, Parent, Vertex, WeightedGraph};
use crate::graph::validate::{validate_start, validate_structure, validate_weights};
use crate::trace_time;

/// Bellman-Ford shortest paths trace from `start`
///
/// Always runs `n - 1` full relaxation passes. Negative weights are accepted
/// but negative cycles are not detected.
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn bellman_ford(input: &GraphInput, start: Vertex) -> Result<Vec<BellmanFordStep>> {
    validate_structure(input, None)?;
    let start = validate_start(input, Some(start))?;
    let graph = validate_weights(input)?;
    Ok(run_bellman_ford(&graph, start))
}

struct BellmanFordState {
    costs: Vec<Cost>,
    parents: Vec<Parent>,
    iteration: usize,
    current_vertex: Vertex,
    current_edge: Option<EdgeKey>,
    green_edges: BTreeSet<EdgeKey>,
    recorder: StepRecorder<BellmanFordStep>,
}

impl BellmanFordState {
    fn record(&mut self, narration: Narration) {
        let step = BellmanFordStep {
            step_number: self.recorder.next_step_number(),
            iteration: self.iteration,
            current_vertex: self.current_vertex,
            current_edge: self.current_edge,
            green_edges: self.green_edges.iter().copied().collect(),
            costs: self.costs.clone(),
            parents: self.parents.clone(),
            narration,
        };
        self.recorder.push(step);
    }

    /// Relax `from -> to`, moving the green parent edge when the cost drops
    fn relax(&mut self, from: Vertex, to: Vertex, weight: f64) -> Narration {
        let iteration = self.iteration;
        let candidate = self.costs[from] + weight;
        if candidate >= self.costs[to] {
            return Narration::EdgeUnchanged { iteration, from, to };
        }

        self.costs[to] = candidate;
        let removed = self.parents[to].vertex().map(|old| (old, to));
        if let Some(edge) = removed {
            self.green_edges.remove(&edge);
        }
        self.parents[to] = Parent::Vertex(from);
        self.green_edges.insert((from, to));
        Narration::EdgeRelaxed {
            iteration,
            from,
            to,
            removed,
        }
    }
}

pub(crate) fn run_bellman_ford(graph: &WeightedGraph<'_>, start: Vertex) -> Vec<BellmanFordStep> {
    let begin = Instant::now();
    let n = graph.vertex_count();
    let (costs, parents) = seed_from_start(graph, start);
    let green_edges = parents
        .iter()
        .enumerate()
        .filter(|(_, parent)| **parent == Parent::Vertex(start))
        .map(|(vertex, _)| (start, vertex))
        .collect();

    let mut state = BellmanFordState {
        costs,
        parents,
        iteration: 0,
        current_vertex: start,
        current_edge: None,
        green_edges,
        recorder: StepRecorder::new(),
    };
    state.record(Narration::ShortestPathsInitialized { start });

    for iteration in 1..n {
        state.iteration = iteration;
        for vertex in 0..n {
            state.current_vertex = vertex;
            for (neighbor, weight) in graph.weighted_neighbors(vertex) {
                state.current_edge = Some((vertex, neighbor));
                let narration = state.relax(vertex, neighbor, weight);
                state.record(narration);
            }
            state.current_edge = None;
            state.record(Narration::VertexPassFinished { iteration, vertex });
        }
        tracing::debug!(iteration, "bellman_ford_pass");
    }

    trace_time!(begin, "bellman_ford", steps = state.recorder.len());
    state.recorder.finish()
}

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::time::Instant;

use super::shared::seed_from_start;
use crate::error::Result;
use crate::graph::narration::Narration;
use crate::graph::steps::{DijkstraStep, StepRecorder};
use crate::graph::types::{Cost, EdgeKey, GraphInput, Parent, Vertex, WeightedGraph};
use crate::graph::validate::{validate_start, validate_structure, validate_weights};
use crate::trace_time;

/// Dijkstra's shortest paths trace from `start`
///
/// The next vertex is picked by a linear scan; among equal costs the lowest
/// label wins. Unreachable vertices are still selected (at infinite cost) and
/// keep an unassigned parent.
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn dijkstra(input: &GraphInput, start: Vertex) -> Result<Vec<DijkstraStep>> {
    validate_structure(input, None)?;
    let start = validate_start(input, Some(start))?;
    let graph = validate_weights(input)?;
    Ok(run_dijkstra(&graph, start))
}

struct DijkstraState {
    costs: Vec<Cost>,
    parents: Vec<Parent>,
    settled: Vec<bool>,
    current_vertex: Option<Vertex>,
    current_edge: Option<EdgeKey>,
    green_vertices: BTreeSet<Vertex>,
    green_edges: BTreeSet<EdgeKey>,
    recorder: StepRecorder<DijkstraStep>,
}

impl DijkstraState {
    fn record(&mut self, narration: Narration) {
        let step = DijkstraStep {
            step_number: self.recorder.next_step_number(),
            current_vertex: self.current_vertex,
            current_edge: self.current_edge,
            green_vertices: self.green_vertices.iter().copied().collect(),
            green_edges: self.green_edges.iter().copied().collect(),
            costs: self.costs.clone(),
            parents: self.parents.clone(),
            narration,
        };
        self.recorder.push(step);
    }

    /// Leftmost unsettled vertex with the strictly smallest cost
    fn cheapest_unsettled(&self) -> Option<Vertex> {
        let mut best: Option<Vertex> = None;
        for vertex in (0..self.costs.len()).filter(|&v| !self.settled[v]) {
            match best {
                Some(current) if self.costs[vertex] >= self.costs[current] => {}
                _ => best = Some(vertex),
            }
        }
        best
    }
}

pub(crate) fn run_dijkstra(graph: &WeightedGraph<'_>, start: Vertex) -> Vec<DijkstraStep> {
    let begin = Instant::now();
    let n = graph.vertex_count();
    let (costs, parents) = seed_from_start(graph, start);

    let mut state = DijkstraState {
        costs,
        parents,
        settled: vec![false; n],
        current_vertex: Some(start),
        current_edge: None,
        green_vertices: BTreeSet::from([start]),
        green_edges: BTreeSet::new(),
        recorder: StepRecorder::new(),
    };
    state.settled[start] = true;
    state.record(Narration::ShortestPathsInitialized { start });

    for _ in 1..n {
        let Some(vertex) = state.cheapest_unsettled() else {
            break;
        };
        state.current_vertex = Some(vertex);
        state.current_edge = None;
        state.green_vertices.insert(vertex);
        if let Parent::Vertex(parent) = state.parents[vertex] {
            state.green_edges.insert((parent, vertex));
        }
        state.record(Narration::MinCostVertexSelected { vertex });

        for (neighbor, weight) in graph.weighted_neighbors(vertex) {
            if state.settled[neighbor] {
                continue;
            }
            state.current_edge = Some((vertex, neighbor));
            let candidate = state.costs[vertex] + weight;
            let updated = candidate < state.costs[neighbor];
            if updated {
                state.costs[neighbor] = candidate;
                state.parents[neighbor] = Parent::Vertex(vertex);
            }
            state.record(Narration::RelaxingEdge {
                from: vertex,
                to: neighbor,
                updated,
            });
        }

        state.settled[vertex] = true;
        state.current_edge = None;
        state.record(Narration::VertexSettled { vertex });
    }

    trace_time!(begin, "dijkstra", steps = state.recorder.len());
    state.recorder.finish()
}

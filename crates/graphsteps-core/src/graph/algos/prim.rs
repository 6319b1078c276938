use std::cmp::Ordering;
use std::collections::VecDeque;
use std::time::Instant;

use super::shared::{build_edge_list, SpanningTreeState};
use crate::error::Result;
use crate::graph::narration::Narration;
use crate::graph::steps::SpanningTreeStep;
use crate::graph::types::{Edge, GraphInput, Parent, Vertex, WeightedGraph};
use crate::graph::validate::{validate_start, validate_structure, validate_weights};
use crate::trace_time;

/// Prim/Dijkstra minimum spanning tree trace grown from `start`
///
/// The start vertex is marked with [`Parent::Root`]. Candidate edges are kept
/// ordered by weight; among equal weights the edge inserted first is popped
/// first.
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn prim_dijkstra(input: &GraphInput, start: Vertex) -> Result<Vec<SpanningTreeStep>> {
    validate_structure(input, None)?;
    let start = validate_start(input, Some(start))?;
    let graph = validate_weights(input)?;
    Ok(run_prim_dijkstra(&graph, start))
}

/// Weight-ordered candidate list over the master edge list
struct Candidates<'e> {
    edges: &'e [Edge],
    queue: VecDeque<usize>,
    /// Edges that have ever entered the candidate list
    considered: Vec<bool>,
}

impl<'e> Candidates<'e> {
    fn new(edges: &'e [Edge]) -> Self {
        Self {
            edges,
            queue: VecDeque::new(),
            considered: vec![false; edges.len()],
        }
    }

    /// Insert every not yet considered edge incident to `vertex`, in edge list order
    fn add_incident(&mut self, vertex: Vertex) {
        for index in 0..self.edges.len() {
            if !self.considered[index] && self.edges[index].is_incident(vertex) {
                self.considered[index] = true;
                self.insert(index);
            }
        }
    }

    /// Sorted insertion after all entries of equal weight
    fn insert(&mut self, index: usize) {
        let edges = self.edges;
        let edge = &edges[index];
        let position = self
            .queue
            .partition_point(|&queued| edges[queued].cmp_weight(edge) != Ordering::Greater);
        self.queue.insert(position, index);
    }

    fn pop(&mut self) -> Option<Edge> {
        self.queue.pop_front().map(|index| self.edges[index])
    }
}

pub(crate) fn run_prim_dijkstra(graph: &WeightedGraph<'_>, start: Vertex) -> Vec<SpanningTreeStep> {
    let begin = Instant::now();
    let target = graph.vertex_count().saturating_sub(1);
    let edges = build_edge_list(graph);

    let mut parents = vec![Parent::Unassigned; graph.vertex_count()];
    parents[start] = Parent::Root;

    let mut candidates = Candidates::new(&edges);
    candidates.add_incident(start);

    let mut state = SpanningTreeState::new();

    while state.accepted_count() < target {
        let Some(edge) = candidates.pop() else {
            tracing::debug!(accepted = state.accepted_count(), "prim_candidates_exhausted");
            break;
        };
        let (first, second) = edge.key();
        state.record(&edge, &parents, Narration::CheckingEdge { from: first, to: second });

        let joined = if parents[first].is_unassigned() {
            parents[first] = Parent::Vertex(second);
            Some(first)
        } else if parents[second].is_unassigned() {
            parents[second] = Parent::Vertex(first);
            Some(second)
        } else {
            None
        };

        let narration = match joined {
            Some(vertex) => {
                candidates.add_incident(vertex);
                state.accept(&edge);
                Narration::EdgeAccepted { from: first, to: second }
            }
            None => {
                state.reject(&edge);
                Narration::EdgeClosesCycle { from: first, to: second }
            }
        };
        state.record(&edge, &parents, narration);
    }

    let (steps, tree) = state.finish();
    trace_time!(begin, "prim_dijkstra", steps = steps.len(), tree_edges = tree.len());
    steps
}

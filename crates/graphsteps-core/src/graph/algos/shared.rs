use std::collections::BTreeSet;

use crate::graph::narration::Narration;
use crate::graph::steps::{SpanningTreeStep, StepRecorder};
use crate::graph::types::{Cost, Edge, EdgeKey, Parent, Vertex, WeightedGraph};

/// Build the undirected edge list from adjacency and weights
///
/// One edge per pair, kept from the endpoint with the smaller label
/// (`neighbor > vertex`), in adjacency scan order. Self-loops are dropped.
pub fn build_edge_list(graph: &WeightedGraph<'_>) -> Vec<Edge> {
    let mut edges = Vec::new();
    for vertex in 0..graph.vertex_count() {
        for (neighbor, weight) in graph.weighted_neighbors(vertex) {
            if neighbor > vertex {
                edges.push(Edge::new(vertex, neighbor, weight));
            }
        }
    }
    edges
}

/// Coloring and bookkeeping shared by both spanning tree algorithms
#[derive(Default)]
pub struct SpanningTreeState {
    red_edges: BTreeSet<EdgeKey>,
    green_edges: BTreeSet<EdgeKey>,
    green_vertices: BTreeSet<Vertex>,
    tree_edges: Vec<Edge>,
    tree_weight: f64,
    recorder: StepRecorder<SpanningTreeStep>,
}

impl SpanningTreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted_count(&self) -> usize {
        self.tree_edges.len()
    }

    pub fn accept(&mut self, edge: &Edge) {
        self.green_edges.insert(edge.key());
        self.green_vertices.insert(edge.start);
        self.green_vertices.insert(edge.end);
        self.tree_edges.push(*edge);
        self.tree_weight += edge.weight;
    }

    pub fn reject(&mut self, edge: &Edge) {
        self.red_edges.insert(edge.key());
    }

    pub fn record(&mut self, edge: &Edge, parents: &[Parent], narration: Narration) {
        let step = SpanningTreeStep {
            step_number: self.recorder.next_step_number(),
            current_edge: edge.key(),
            red_edges: self.red_edges.iter().copied().collect(),
            green_edges: self.green_edges.iter().copied().collect(),
            green_vertices: self.green_vertices.iter().copied().collect(),
            parents: parents.to_vec(),
            tree_weight: self.tree_weight,
            narration,
        };
        self.recorder.push(step);
    }

    pub fn finish(self) -> (Vec<SpanningTreeStep>, Vec<Edge>) {
        (self.recorder.finish(), self.tree_edges)
    }
}

/// Initial costs and parents for single-source shortest paths
///
/// The start costs 0; each direct neighbor costs its edge weight with the
/// start as parent (a later listing of the same neighbor wins). A self-loop
/// on the start is ignored.
pub fn seed_from_start(graph: &WeightedGraph<'_>, start: Vertex) -> (Vec<Cost>, Vec<Parent>) {
    let n = graph.vertex_count();
    let mut costs = vec![Cost::INFINITY; n];
    let mut parents = vec![Parent::Unassigned; n];

    costs[start] = 0.0;
    for (neighbor, weight) in graph.weighted_neighbors(start) {
        if neighbor == start {
            continue;
        }
        costs[neighbor] = weight;
        parents[neighbor] = Parent::Vertex(start);
    }

    (costs, parents)
}

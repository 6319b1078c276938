//! Step records and the append-only step sequence
//!
//! Each algorithm has its own record shape; [`StepTrace`] wraps whichever
//! sequence a run produced and serializes as a plain JSON array.

use serde::Serialize;

use super::narration::Narration;
use super::types::{Cost, EdgeKey, Parent, Vertex, VisitState};
use crate::records::{format_costs, format_edge, format_edges, format_parents, format_vertices, format_visited};

/// Common view over all step record types
pub trait StepRecord {
    fn step_number(&self) -> usize;
    fn narration(&self) -> &Narration;
    fn current_edge(&self) -> Option<EdgeKey>;
    /// Algorithm-specific state as `key=value` fields for records output
    fn record_fields(&self) -> Vec<(&'static str, String)>;
}

/// Snapshot of a BFS/DFS traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStep {
    pub step_number: usize,
    pub current_vertex: Vertex,
    pub current_edge: Option<EdgeKey>,
    pub visited: Vec<VisitState>,
    /// Frontier contents in the order they will be popped
    pub frontier: Vec<Vertex>,
    pub parents: Vec<Parent>,
    pub red_edges: Vec<EdgeKey>,
    pub green_edges: Vec<EdgeKey>,
    pub narration: Narration,
}

/// Snapshot of Kruskal or Prim/Dijkstra spanning tree construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeStep {
    pub step_number: usize,
    pub current_edge: EdgeKey,
    pub red_edges: Vec<EdgeKey>,
    pub green_edges: Vec<EdgeKey>,
    pub green_vertices: Vec<Vertex>,
    /// Union-find forest for Kruskal, tree parents for Prim/Dijkstra
    pub parents: Vec<Parent>,
    /// Sum of the weights of all accepted edges so far
    pub tree_weight: f64,
    pub narration: Narration,
}

/// Snapshot of Dijkstra's shortest paths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraStep {
    pub step_number: usize,
    pub current_vertex: Option<Vertex>,
    pub current_edge: Option<EdgeKey>,
    pub green_vertices: Vec<Vertex>,
    pub green_edges: Vec<EdgeKey>,
    pub costs: Vec<Cost>,
    pub parents: Vec<Parent>,
    pub narration: Narration,
}

/// Snapshot of Bellman-Ford shortest paths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordStep {
    pub step_number: usize,
    /// Relaxation pass, `0` for the initialization step
    pub iteration: usize,
    pub current_vertex: Vertex,
    pub current_edge: Option<EdgeKey>,
    pub green_edges: Vec<EdgeKey>,
    pub costs: Vec<Cost>,
    pub parents: Vec<Parent>,
    pub narration: Narration,
}

impl StepRecord for SearchStep {
    fn step_number(&self) -> usize {
        self.step_number
    }

    fn narration(&self) -> &Narration {
        &self.narration
    }

    fn current_edge(&self) -> Option<EdgeKey> {
        self.current_edge
    }

    fn record_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vertex", self.current_vertex.to_string()),
            ("edge", format_edge(self.current_edge)),
            ("visited", format_visited(&self.visited)),
            ("frontier", format_vertices(&self.frontier)),
            ("parents", format_parents(&self.parents)),
            ("green", format_edges(&self.green_edges)),
            ("red", format_edges(&self.red_edges)),
        ]
    }
}

impl StepRecord for SpanningTreeStep {
    fn step_number(&self) -> usize {
        self.step_number
    }

    fn narration(&self) -> &Narration {
        &self.narration
    }

    fn current_edge(&self) -> Option<EdgeKey> {
        Some(self.current_edge)
    }

    fn record_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("edge", format_edge(Some(self.current_edge))),
            ("green", format_edges(&self.green_edges)),
            ("red", format_edges(&self.red_edges)),
            ("green_vertices", format_vertices(&self.green_vertices)),
            ("parents", format_parents(&self.parents)),
            ("weight", self.tree_weight.to_string()),
        ]
    }
}

impl StepRecord for DijkstraStep {
    fn step_number(&self) -> usize {
        self.step_number
    }

    fn narration(&self) -> &Narration {
        &self.narration
    }

    fn current_edge(&self) -> Option<EdgeKey> {
        self.current_edge
    }

    fn record_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "vertex",
                self.current_vertex
                    .map_or_else(|| "-".to_string(), |v| v.to_string()),
            ),
            ("edge", format_edge(self.current_edge)),
            ("costs", format_costs(&self.costs)),
            ("parents", format_parents(&self.parents)),
            ("green", format_edges(&self.green_edges)),
            ("green_vertices", format_vertices(&self.green_vertices)),
        ]
    }
}

impl StepRecord for BellmanFordStep {
    fn step_number(&self) -> usize {
        self.step_number
    }

    fn narration(&self) -> &Narration {
        &self.narration
    }

    fn current_edge(&self) -> Option<EdgeKey> {
        self.current_edge
    }

    fn record_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("iteration", self.iteration.to_string()),
            ("vertex", self.current_vertex.to_string()),
            ("edge", format_edge(self.current_edge)),
            ("costs", format_costs(&self.costs)),
            ("parents", format_parents(&self.parents)),
            ("green", format_edges(&self.green_edges)),
        ]
    }
}

/// Append-only step sequence under construction
///
/// Hands out step numbers equal to the position of the next record.
#[derive(Debug)]
pub struct StepRecorder<S> {
    steps: Vec<S>,
}

impl<S> Default for StepRecorder<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> StepRecorder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_step_number(&self) -> usize {
        self.steps.len()
    }

    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<S> {
        self.steps
    }
}

/// Complete output of one algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepTrace {
    Search(Vec<SearchStep>),
    SpanningTree(Vec<SpanningTreeStep>),
    Dijkstra(Vec<DijkstraStep>),
    BellmanFord(Vec<BellmanFordStep>),
}

impl StepTrace {
    pub fn len(&self) -> usize {
        match self {
            StepTrace::Search(steps) => steps.len(),
            StepTrace::SpanningTree(steps) => steps.len(),
            StepTrace::Dijkstra(steps) => steps.len(),
            StepTrace::BellmanFord(steps) => steps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All steps through the common record view, in order
    pub fn records(&self) -> Vec<&dyn StepRecord> {
        match self {
            StepTrace::Search(steps) => steps.iter().map(|s| s as &dyn StepRecord).collect(),
            StepTrace::SpanningTree(steps) => steps.iter().map(|s| s as &dyn StepRecord).collect(),
            StepTrace::Dijkstra(steps) => steps.iter().map(|s| s as &dyn StepRecord).collect(),
            StepTrace::BellmanFord(steps) => steps.iter().map(|s| s as &dyn StepRecord).collect(),
        }
    }
}

use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Vertex label; always equal to the vertex's position in the input
pub type Vertex = usize;

/// Edge weight as supplied in the weight matrix
pub type Weight = f64;

/// Tentative path cost; `f64::INFINITY` marks an unreachable vertex
pub type Cost = f64;

/// Ordered `(from, to)` pair identifying a directed view of an edge
pub type EdgeKey = (Vertex, Vertex);

/// Weighted undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub start: Vertex,
    pub end: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(start: Vertex, end: Vertex, weight: Weight) -> Self {
        Self { start, end, weight }
    }

    /// The `(start, end)` key used for edge coloring
    pub fn key(&self) -> EdgeKey {
        (self.start, self.end)
    }

    /// Whether `vertex` is one of the endpoints
    pub fn is_incident(&self, vertex: Vertex) -> bool {
        self.start == vertex || self.end == vertex
    }

    /// Compare by weight only
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Entry of a parent map
///
/// Serializes as an integer: `-1` unassigned, `-2` root, otherwise the parent label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// No parent assigned (unvisited vertex, or a component root in a union-find forest)
    #[default]
    Unassigned,
    /// Explicit root of a growing tree
    Root,
    /// Parent vertex
    Vertex(Vertex),
}

impl Parent {
    pub const UNASSIGNED_CODE: i64 = -1;
    pub const ROOT_CODE: i64 = -2;

    pub fn as_i64(&self) -> i64 {
        match self {
            Parent::Unassigned => Self::UNASSIGNED_CODE,
            Parent::Root => Self::ROOT_CODE,
            Parent::Vertex(v) => *v as i64,
        }
    }

    pub fn vertex(&self) -> Option<Vertex> {
        match self {
            Parent::Vertex(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, Parent::Unassigned)
    }
}

impl Serialize for Parent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Traversal state of a vertex during BFS/DFS
///
/// Serializes as `0` (unvisited), `1` (discovered, waiting in the frontier)
/// or `2` (closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    Discovered,
    Closed,
}

impl VisitState {
    pub fn code(&self) -> u8 {
        match self {
            VisitState::Unvisited => 0,
            VisitState::Discovered => 1,
            VisitState::Closed => 2,
        }
    }
}

impl Serialize for VisitState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Graph supplied by the caller
///
/// `weights[i][k]` is the weight of the edge to `adjacency_list[i][k]`; lookup
/// is positional, so the two rows must stay index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphInput {
    pub vertices: Vec<Vertex>,
    pub adjacency_list: Vec<Vec<Vertex>>,
    pub weights: Option<Vec<Vec<Weight>>>,
}

impl GraphInput {
    /// Create an unweighted graph
    pub fn new(vertices: Vec<Vertex>, adjacency_list: Vec<Vec<Vertex>>) -> Self {
        Self {
            vertices,
            adjacency_list,
            weights: None,
        }
    }

    /// Create a graph whose vertices are `0..adjacency_list.len()`
    pub fn from_adjacency(adjacency_list: Vec<Vec<Vertex>>) -> Self {
        let vertices = (0..adjacency_list.len()).collect();
        Self::new(vertices, adjacency_list)
    }

    /// Attach a weight matrix
    pub fn with_weights(mut self, weights: Vec<Vec<Weight>>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        &self.adjacency_list[vertex]
    }
}

/// Validated view of a weighted graph
///
/// Only built by validation, which guarantees every adjacency row has a weight
/// row of the same length.
#[derive(Debug, Clone, Copy)]
pub struct WeightedGraph<'a> {
    adjacency_list: &'a [Vec<Vertex>],
    weights: &'a [Vec<Weight>],
}

impl<'a> WeightedGraph<'a> {
    pub(crate) fn new(adjacency_list: &'a [Vec<Vertex>], weights: &'a [Vec<Weight>]) -> Self {
        Self {
            adjacency_list,
            weights,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency_list.len()
    }

    /// Neighbors of `vertex` in listed order, paired with their positional weight
    pub fn weighted_neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + 'a {
        self.adjacency_list[vertex]
            .iter()
            .copied()
            .zip(self.weights[vertex].iter().copied())
    }
}

pub mod algorithm;
pub mod algos;
pub mod frontier;
pub mod narration;
pub mod request;
pub mod steps;
pub mod types;
pub mod union_find;
pub mod validate;

pub use algorithm::{run_algorithm, run_algorithm_with, Algorithm, TraceOptions};
pub use algos::{bellman_ford, bfs, dfs, dijkstra, kruskal, prim_dijkstra};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier};
pub use narration::{Locale, Narration};
pub use request::TraceRequest;
pub use steps::{
    BellmanFordStep, DijkstraStep, SearchStep, SpanningTreeStep, StepRecord, StepTrace,
};
pub use types::{Cost, Edge, EdgeKey, GraphInput, Parent, Vertex, VisitState, Weight};

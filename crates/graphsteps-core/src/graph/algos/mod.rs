//! Step-recording graph algorithms
//!
//! Every entry point validates its input, builds fresh per-run state and
//! returns the complete step sequence. No state survives between calls.

pub mod bellman_ford;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod search;
pub mod shared;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use kruskal::kruskal;
pub use prim::prim_dijkstra;
pub use search::{bfs, dfs, search};

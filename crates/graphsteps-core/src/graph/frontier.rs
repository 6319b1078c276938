//! Frontier disciplines for search traversal
//!
//! BFS and DFS share one traversal routine; the only difference is the order
//! in which discovered vertices leave the frontier.

use std::collections::VecDeque;

use super::types::Vertex;

/// Discovered-but-unprocessed vertices awaiting traversal
pub trait Frontier {
    fn push(&mut self, vertex: Vertex);
    fn pop(&mut self) -> Option<Vertex>;
    fn is_empty(&self) -> bool;
    /// Current contents in the order they would be popped
    fn snapshot(&self) -> Vec<Vertex>;
}

/// First-in, first-out frontier (breadth-first search)
#[derive(Debug, Clone, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Vertex>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, vertex: Vertex) {
        self.queue.push_back(vertex);
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn snapshot(&self) -> Vec<Vertex> {
        self.queue.iter().copied().collect()
    }
}

/// Last-in, first-out frontier (depth-first search)
#[derive(Debug, Clone, Default)]
pub struct LifoFrontier {
    stack: Vec<Vertex>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, vertex: Vertex) {
        self.stack.push(vertex);
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn snapshot(&self) -> Vec<Vertex> {
        self.stack.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut dyn Frontier) -> Vec<Vertex> {
        let mut order = Vec::new();
        while let Some(v) = frontier.pop() {
            order.push(v);
        }
        order
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = FifoFrontier::new();
        for v in [3, 1, 2] {
            frontier.push(v);
        }
        assert_eq!(frontier.snapshot(), vec![3, 1, 2]);
        assert_eq!(drain(&mut frontier), vec![3, 1, 2]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut frontier = LifoFrontier::new();
        for v in [3, 1, 2] {
            frontier.push(v);
        }
        assert_eq!(frontier.snapshot(), vec![2, 1, 3]);
        assert_eq!(drain(&mut frontier), vec![2, 1, 3]);
        assert!(frontier.is_empty());
    }
}

//! Parent-pointer forest used by Kruskal's algorithm
//!
//! Representatives are found by walking parent links to the root. There is
//! no path compression and no union by rank: the forest shape, and therefore
//! every recorded snapshot of it, depends only on the order of unions.

use super::types::{Parent, Vertex};

#[derive(Debug, Clone)]
pub struct ParentForest {
    parents: Vec<Parent>,
}

impl ParentForest {
    /// Forest of `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parents: vec![Parent::Unassigned; n],
        }
    }

    /// Root of the component containing `vertex`
    pub fn find(&self, vertex: Vertex) -> Vertex {
        let mut current = vertex;
        while let Parent::Vertex(parent) = self.parents[current] {
            current = parent;
        }
        current
    }

    /// Attach the root `child` under the root `root`
    pub fn union(&mut self, root: Vertex, child: Vertex) {
        debug_assert_eq!(self.find(root), root);
        debug_assert_eq!(self.find(child), child);
        debug_assert_ne!(root, child);
        self.parents[child] = Parent::Vertex(root);
    }

    pub fn parents(&self) -> &[Parent] {
        &self.parents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(forest: &ParentForest, vertex: Vertex) -> usize {
        let mut links = 0;
        let mut current = vertex;
        while let Parent::Vertex(parent) = forest.parents()[current] {
            current = parent;
            links += 1;
        }
        links
    }

    #[test]
    fn test_singletons_are_their_own_roots() {
        let forest = ParentForest::new(3);
        assert_eq!(forest.find(0), 0);
        assert_eq!(forest.find(2), 2);
        assert!(forest.parents().iter().all(|p| p.is_unassigned()));
    }

    #[test]
    fn test_union_links_child_root_under_root() {
        let mut forest = ParentForest::new(4);
        forest.union(0, 1);
        forest.union(2, 3);
        forest.union(0, 2);

        for v in 0..4 {
            assert_eq!(forest.find(v), 0);
        }
        assert_eq!(forest.parents()[1], Parent::Vertex(0));
        assert_eq!(forest.parents()[2], Parent::Vertex(0));
        assert_eq!(forest.parents()[3], Parent::Vertex(2));
    }

    #[test]
    fn test_no_compression_keeps_chains() {
        let mut forest = ParentForest::new(5);
        // Chain 0 <- 1 <- 2 <- 3 <- 4 built by always attaching the old root below the new one
        for v in 1..5 {
            let old_root = forest.find(v - 1);
            forest.union(v, old_root);
        }
        assert_eq!(forest.find(0), 4);
        assert_eq!(depth(&forest, 0), 4);
        // Lookups leave the chain untouched
        assert_eq!(forest.find(0), 4);
        assert_eq!(depth(&forest, 0), 4);
    }
}

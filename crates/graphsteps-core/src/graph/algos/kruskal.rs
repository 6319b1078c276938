use std::time::Instant;

use super::shared::{build_edge_list, SpanningTreeState};
use crate::error::Result;
use crate::graph::narration::Narration;
use crate::graph::steps::SpanningTreeStep;
use crate::graph::types::{GraphInput, WeightedGraph};
use crate::graph::union_find::ParentForest;
use crate::graph::validate::{validate_structure, validate_weights};
use crate::trace_time;

/// Kruskal's minimum spanning tree trace
///
/// Edges are examined in ascending weight order (ties keep edge list order).
/// Components are tracked with a [`ParentForest`] whose links appear in every
/// snapshot as `parents`.
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn kruskal(input: &GraphInput) -> Result<Vec<SpanningTreeStep>> {
    validate_structure(input, None)?;
    let graph = validate_weights(input)?;
    Ok(run_kruskal(&graph))
}

pub(crate) fn run_kruskal(graph: &WeightedGraph<'_>) -> Vec<SpanningTreeStep> {
    let begin = Instant::now();
    let target = graph.vertex_count().saturating_sub(1);

    let mut edges = build_edge_list(graph);
    edges.sort_by(|a, b| a.cmp_weight(b));

    let mut forest = ParentForest::new(graph.vertex_count());
    let mut state = SpanningTreeState::new();

    for edge in &edges {
        let first = forest.find(edge.start);
        let second = forest.find(edge.end);
        state.record(
            edge,
            forest.parents(),
            Narration::CheckingEdge {
                from: edge.start,
                to: edge.end,
            },
        );

        if first != second {
            forest.union(first, second);
            state.accept(edge);
            state.record(
                edge,
                forest.parents(),
                Narration::EdgeAccepted {
                    from: edge.start,
                    to: edge.end,
                },
            );
            tracing::debug!(edge = ?edge.key(), weight = edge.weight, "kruskal_accept");

            if state.accepted_count() == target {
                break;
            }
        } else {
            state.reject(edge);
            state.record(
                edge,
                forest.parents(),
                Narration::EdgeClosesCycle {
                    from: edge.start,
                    to: edge.end,
                },
            );
        }
    }

    let (steps, tree) = state.finish();
    trace_time!(begin, "kruskal", steps = steps.len(), tree_edges = tree.len());
    steps
}

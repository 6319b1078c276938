use crate::graph::types::{Cost, EdgeKey, Parent, Vertex, VisitState};

/// Utilities for records output format
/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format an optional edge as `from-to`, or `-` when absent
pub fn format_edge(edge: Option<EdgeKey>) -> String {
    match edge {
        Some((from, to)) => format!("{}-{}", from, to),
        None => "-".to_string(),
    }
}

/// Format a list of edges as comma-separated `from-to` pairs, or `-` when empty
pub fn format_edges(edges: &[EdgeKey]) -> String {
    if edges.is_empty() {
        return "-".to_string();
    }
    edges
        .iter()
        .map(|&(from, to)| format!("{}-{}", from, to))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a list of vertices as comma-separated labels, or `-` when empty
pub fn format_vertices(vertices: &[Vertex]) -> String {
    if vertices.is_empty() {
        return "-".to_string();
    }
    join(vertices.iter())
}

/// Format visit states as comma-separated `0`/`1`/`2` codes
pub fn format_visited(visited: &[VisitState]) -> String {
    join(visited.iter().map(|state| state.code()))
}

/// Format a parent map as comma-separated integers (`-1` unassigned, `-2` root)
pub fn format_parents(parents: &[Parent]) -> String {
    join(parents.iter().map(|parent| parent.as_i64()))
}

/// Format costs as comma-separated numbers, `inf` for unreachable vertices
pub fn format_costs(costs: &[Cost]) -> String {
    join(costs.iter().map(|cost| {
        if cost.is_infinite() {
            "inf".to_string()
        } else {
            cost.to_string()
        }
    }))
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(",")
}

//! Input validation
//!
//! Every algorithm indexes its arrays by raw vertex label, so malformed input
//! is rejected here, before any step is recorded.

use super::types::{GraphInput, Vertex, WeightedGraph};
use crate::bail_invalid_input;
use crate::error::{GraphStepsError, Result};

/// Check labels and adjacency shape, and an optional vertex-count limit
pub fn validate_structure(input: &GraphInput, max_vertices: Option<usize>) -> Result<()> {
    let n = input.vertex_count();

    if let Some(max) = max_vertices {
        if n > max {
            bail_invalid_input!("graph has {} vertices, limit is {}", n, max);
        }
    }

    if let Some((position, label)) = input
        .vertices
        .iter()
        .enumerate()
        .find(|(position, label)| *position != **label)
    {
        bail_invalid_input!(
            "vertex labels must equal their position: vertices[{}] is {}",
            position,
            label
        );
    }

    if input.adjacency_list.len() != n {
        bail_invalid_input!(
            "adjacency_list has {} entries for {} vertices",
            input.adjacency_list.len(),
            n
        );
    }

    for (vertex, neighbors) in input.adjacency_list.iter().enumerate() {
        if let Some(neighbor) = neighbors.iter().find(|&&neighbor| neighbor >= n) {
            bail_invalid_input!(
                "adjacency_list[{}] references vertex {} outside 0..{}",
                vertex,
                neighbor,
                n
            );
        }
    }

    Ok(())
}

/// Check that the start vertex is present and in range
pub fn validate_start(input: &GraphInput, start: Option<Vertex>) -> Result<Vertex> {
    let start = start.ok_or_else(|| GraphStepsError::missing_field("start_vertex"))?;
    if start >= input.vertex_count() {
        bail_invalid_input!(
            "start vertex {} is not one of the {} vertices",
            start,
            input.vertex_count()
        );
    }
    Ok(start)
}

/// Check the weight matrix against the adjacency list and return a weighted view
pub fn validate_weights(input: &GraphInput) -> Result<WeightedGraph<'_>> {
    let weights = input
        .weights
        .as_deref()
        .ok_or_else(|| GraphStepsError::missing_field("weights"))?;

    if weights.len() != input.adjacency_list.len() {
        bail_invalid_input!(
            "weights has {} rows for {} adjacency entries",
            weights.len(),
            input.adjacency_list.len()
        );
    }

    // A simple path has at most n - 1 edges; keep every such sum finite
    let path_edges = input.vertex_count().saturating_sub(1).max(1);
    let weight_limit = f64::MAX / path_edges as f64;

    for (vertex, (row, neighbors)) in weights.iter().zip(&input.adjacency_list).enumerate() {
        if row.len() != neighbors.len() {
            bail_invalid_input!(
                "weights[{}] has {} entries for {} neighbors",
                vertex,
                row.len(),
                neighbors.len()
            );
        }
        if let Some(weight) = row.iter().find(|w| !w.is_finite()) {
            bail_invalid_input!("weights[{}] contains non-finite weight {}", vertex, weight);
        }
        if let Some(weight) = row.iter().find(|w| w.abs() > weight_limit) {
            bail_invalid_input!(
                "weights[{}] contains {}, too large to sum over {} edges",
                vertex,
                weight,
                path_edges
            );
        }
    }

    Ok(WeightedGraph::new(&input.adjacency_list, weights))
}

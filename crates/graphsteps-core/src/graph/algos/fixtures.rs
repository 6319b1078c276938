//! Shared test graphs

use crate::graph::types::GraphInput;

/// 4-cycle with weights 1, 2, 3, 4 on edges (0,1), (1,2), (2,3), (3,0)
pub fn weighted_square() -> GraphInput {
    GraphInput::from_adjacency(vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]])
        .with_weights(vec![
            vec![1.0, 4.0],
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            vec![3.0, 4.0],
        ])
}

/// Square with one diagonal: 0-1, 0-2, 1-3, 2-3
pub fn diamond() -> GraphInput {
    GraphInput::from_adjacency(vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2]])
}

/// Build a symmetric weighted graph from an undirected edge list
pub fn weighted_from_edges(n: usize, edges: &[(usize, usize, f64)]) -> GraphInput {
    let mut adjacency = vec![Vec::new(); n];
    let mut weights = vec![Vec::new(); n];
    for &(a, b, w) in edges {
        adjacency[a].push(b);
        weights[a].push(w);
        adjacency[b].push(a);
        weights[b].push(w);
    }
    GraphInput::from_adjacency(adjacency).with_weights(weights)
}

/// Small connected weighted graphs with repeated weights
pub fn weighted_samples() -> Vec<GraphInput> {
    vec![
        weighted_square(),
        weighted_from_edges(
            6,
            &[
                (0, 1, 7.0),
                (0, 2, 9.0),
                (0, 5, 14.0),
                (1, 2, 10.0),
                (1, 3, 15.0),
                (2, 3, 11.0),
                (2, 5, 2.0),
                (3, 4, 6.0),
                (4, 5, 9.0),
            ],
        ),
        weighted_from_edges(
            5,
            &[
                (0, 1, 2.0),
                (0, 2, 2.0),
                (1, 2, 2.0),
                (1, 3, 1.0),
                (2, 4, 1.0),
                (3, 4, 2.0),
            ],
        ),
        weighted_from_edges(
            7,
            &[
                (0, 1, 4.0),
                (0, 6, 1.0),
                (1, 2, 3.0),
                (1, 6, 2.0),
                (2, 3, 5.0),
                (3, 4, 1.0),
                (3, 6, 7.0),
                (4, 5, 2.0),
                (5, 6, 3.0),
                (5, 2, 6.0),
            ],
        ),
    ]
}

/// Shortest distances by Floyd-Warshall, for cross-checking
pub fn reference_distances(input: &GraphInput) -> Vec<Vec<f64>> {
    let n = input.vertex_count();
    let weights = input.weights.as_ref().expect("weighted input");
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = 0.0;
    }
    for v in 0..n {
        for (k, &neighbor) in input.adjacency_list[v].iter().enumerate() {
            let w = weights[v][k];
            if w < dist[v][neighbor] {
                dist[v][neighbor] = w;
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

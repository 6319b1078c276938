use super::*;
use crate::error::GraphStepsError;
use crate::graph::algos::fixtures::diamond;
use std::collections::VecDeque;

fn closing_order(steps: &[SearchStep]) -> Vec<Vertex> {
    steps
        .iter()
        .filter_map(|step| match step.narration {
            Narration::VertexClosed { vertex } => Some(vertex),
            _ => None,
        })
        .collect()
}

fn final_parents(steps: &[SearchStep]) -> Vec<i64> {
    steps
        .last()
        .unwrap()
        .parents
        .iter()
        .map(Parent::as_i64)
        .collect()
}

/// Hop distances from `start` computed independently of the traced search
fn hop_layers(input: &GraphInput, start: Vertex) -> Vec<Option<usize>> {
    let mut layers = vec![None; input.vertex_count()];
    let mut queue = VecDeque::from([start]);
    layers[start] = Some(0);
    while let Some(v) = queue.pop_front() {
        for &n in input.neighbors(v) {
            if layers[n].is_none() {
                layers[n] = Some(layers[v].unwrap() + 1);
                queue.push_back(n);
            }
        }
    }
    layers
}

fn tree_depth(parents: &[Parent], mut vertex: Vertex) -> usize {
    let mut depth = 0;
    while let Parent::Vertex(parent) = parents[vertex] {
        vertex = parent;
        depth += 1;
    }
    depth
}

#[test]
fn test_bfs_example_scenario() {
    let steps = bfs(&diamond(), 0).unwrap();

    assert_eq!(closing_order(&steps), vec![0, 1, 2, 3]);
    assert_eq!(final_parents(&steps), vec![-1, 0, 0, 1]);
    assert_eq!(steps.len(), 18);
    assert_eq!(steps[0].narration, Narration::TraversalStarted { vertex: 0 });
    assert_eq!(steps[0].frontier, vec![0]);
    assert_eq!(steps.last().unwrap().narration, Narration::TraversalFinished);
}

#[test]
fn test_bfs_edge_coloring() {
    let steps = bfs(&diamond(), 0).unwrap();
    let last = steps.last().unwrap();

    assert_eq!(last.green_edges, vec![(0, 1), (0, 2), (1, 3)]);
    assert_eq!(last.red_edges, vec![(1, 0), (2, 0), (2, 3), (3, 1), (3, 2)]);

    // Vertex 2 reaches 3 after 1 discovered it
    assert_eq!(
        steps[11].narration,
        Narration::EdgeRejected { from: 2, to: 3 }
    );
    // Walking back along the tree edge to the parent
    assert_eq!(
        steps[6].narration,
        Narration::EdgeAlreadyInTree { from: 1, to: 0 }
    );
    assert_eq!(steps[6].current_edge, Some((1, 0)));
}

#[test]
fn test_bfs_frontier_snapshots() {
    let steps = bfs(&diamond(), 0).unwrap();
    assert_eq!(steps[1].frontier, Vec::<Vertex>::new());
    assert_eq!(steps[3].frontier, vec![1, 2]);
    assert_eq!(steps[7].frontier, vec![2, 3]);
}

#[test]
fn test_dfs_uses_stack_order() {
    let steps = dfs(&diamond(), 0).unwrap();

    assert_eq!(closing_order(&steps), vec![0, 2, 3, 1]);
    assert_eq!(final_parents(&steps), vec![-1, 0, 0, 2]);
    // Both neighbours of 0 are pushed before either is processed; 2 is on top
    assert_eq!(steps[3].frontier, vec![2, 1]);
}

#[test]
fn test_bfs_parents_follow_layers() {
    let graphs = vec![
        diamond(),
        GraphInput::from_adjacency(vec![
            vec![1, 4],
            vec![0, 2, 4],
            vec![1, 3],
            vec![2, 4, 5],
            vec![0, 1, 3],
            vec![3],
        ]),
        GraphInput::from_adjacency(vec![
            vec![1, 3],
            vec![0, 4, 6],
            vec![4, 5],
            vec![0],
            vec![1, 2, 6, 7],
            vec![2, 7],
            vec![1, 4],
            vec![4, 5],
        ]),
    ];

    for input in &graphs {
        for start in 0..input.vertex_count() {
            let steps = bfs(input, start).unwrap();
            let parents = &steps.last().unwrap().parents;
            let layers = hop_layers(input, start);
            for (vertex, layer) in layers.iter().enumerate() {
                if let Some(layer) = layer {
                    assert_eq!(tree_depth(parents, vertex), *layer, "start {start} vertex {vertex}");
                }
            }
        }
    }
}

#[test]
fn test_every_reached_vertex_is_closed() {
    let disconnected = GraphInput::from_adjacency(vec![vec![1], vec![0], vec![3], vec![2]]);
    for input in [diamond(), disconnected] {
        for steps in [bfs(&input, 0).unwrap(), dfs(&input, 0).unwrap()] {
            let last = steps.last().unwrap();
            assert!(!last.visited.contains(&VisitState::Discovered));
            assert!(last.frontier.is_empty());
        }
    }
}

#[test]
fn test_disconnected_vertices_stay_unvisited() {
    let input = GraphInput::from_adjacency(vec![vec![1], vec![0], vec![3], vec![2]]);
    let steps = bfs(&input, 0).unwrap();
    let last = steps.last().unwrap();

    assert_eq!(
        last.visited,
        vec![
            VisitState::Closed,
            VisitState::Closed,
            VisitState::Unvisited,
            VisitState::Unvisited
        ]
    );
    assert_eq!(final_parents(&steps), vec![-1, 0, -1, -1]);
}

#[test]
fn test_self_loop_is_rejected_edge() {
    let input = GraphInput::from_adjacency(vec![vec![0, 1], vec![0]]);
    let steps = bfs(&input, 0).unwrap();

    assert_eq!(steps[2].narration, Narration::EdgeRejected { from: 0, to: 0 });
    assert!(steps.last().unwrap().red_edges.contains(&(0, 0)));
}

#[test]
fn test_single_vertex() {
    let input = GraphInput::from_adjacency(vec![vec![]]);
    let steps = dfs(&input, 0).unwrap();
    let kinds: Vec<_> = steps.iter().map(|s| s.narration.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            Narration::TraversalStarted { vertex: 0 },
            Narration::ProcessingVertex { vertex: 0 },
            Narration::VertexClosed { vertex: 0 },
            Narration::TraversalFinished,
        ]
    );
}

#[test]
fn test_step_numbers_are_positions() {
    let steps = dfs(&diamond(), 3).unwrap();
    for (position, step) in steps.iter().enumerate() {
        assert_eq!(step.step_number, position);
    }
}

#[test]
fn test_runs_are_reproducible() {
    let input = diamond();
    assert_eq!(bfs(&input, 2).unwrap(), bfs(&input, 2).unwrap());
    assert_eq!(dfs(&input, 1).unwrap(), dfs(&input, 1).unwrap());
}

#[test]
fn test_start_out_of_range() {
    let err = bfs(&diamond(), 9).unwrap_err();
    assert!(matches!(err, GraphStepsError::InvalidInput { .. }));
}

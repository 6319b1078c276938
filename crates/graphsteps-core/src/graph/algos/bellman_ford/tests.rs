use super::*;
use crate::graph::algos::dijkstra::dijkstra;
use crate::graph::algos::fixtures::{weighted_from_edges, weighted_samples, weighted_square};

fn parent_codes(step: &BellmanFordStep) -> Vec<i64> {
    step.parents.iter().map(Parent::as_i64).collect()
}

#[test]
fn test_square_from_start_zero() {
    let steps = bellman_ford(&weighted_square(), 0).unwrap();
    let last = steps.last().unwrap();

    // 1 initialization + 3 passes over 8 adjacency entries and 4 vertices
    assert_eq!(steps.len(), 37);
    assert_eq!(steps[0].iteration, 0);
    assert_eq!(steps[0].green_edges, vec![(0, 1), (0, 3)]);
    assert_eq!(last.costs, vec![0.0, 1.0, 3.0, 4.0]);
    assert_eq!(parent_codes(last), vec![-1, 0, 1, 0]);
    assert_eq!(last.green_edges, vec![(0, 1), (0, 3), (1, 2)]);
    assert_eq!(last.narration, Narration::VertexPassFinished { iteration: 3, vertex: 3 });
}

#[test]
fn test_relaxation_replaces_green_parent_edge() {
    let input = weighted_from_edges(3, &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0)]);
    let steps = bellman_ford(&input, 0).unwrap();

    assert_eq!(steps[0].green_edges, vec![(0, 1), (0, 2)]);
    assert_eq!(
        steps[5].narration,
        Narration::EdgeRelaxed {
            iteration: 1,
            from: 1,
            to: 2,
            removed: Some((0, 2)),
        }
    );
    assert_eq!(steps[5].current_vertex, 1);
    assert_eq!(steps[5].current_edge, Some((1, 2)));
    assert_eq!(steps[5].green_edges, vec![(0, 1), (1, 2)]);
    assert_eq!(steps[5].costs, vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_first_relaxation_removes_nothing() {
    let steps = bellman_ford(&weighted_square(), 0).unwrap();
    let relaxed: Vec<_> = steps
        .iter()
        .filter(|s| matches!(s.narration, Narration::EdgeRelaxed { .. }))
        .map(|s| s.narration.clone())
        .collect();
    assert_eq!(
        relaxed,
        vec![Narration::EdgeRelaxed {
            iteration: 1,
            from: 1,
            to: 2,
            removed: None,
        }]
    );
}

#[test]
fn test_runs_exactly_n_minus_one_passes() {
    for input in weighted_samples() {
        let n = input.vertex_count();
        let steps = bellman_ford(&input, 0).unwrap();

        let finished = steps
            .iter()
            .filter(|s| matches!(s.narration, Narration::VertexPassFinished { .. }))
            .count();
        assert_eq!(finished, n * (n - 1));
        assert_eq!(steps.iter().map(|s| s.iteration).max(), Some(n - 1));

        let entries: usize = input.adjacency_list.iter().map(Vec::len).sum();
        assert_eq!(steps.len(), 1 + (n - 1) * (entries + n));
    }
}

#[test]
fn test_agrees_with_dijkstra() {
    for input in weighted_samples() {
        for start in 0..input.vertex_count() {
            let expected = dijkstra(&input, start).unwrap().last().unwrap().costs.clone();
            let steps = bellman_ford(&input, start).unwrap();
            assert_eq!(steps.last().unwrap().costs, expected, "start {}", start);
        }
    }
}

#[test]
fn test_green_edges_follow_parents() {
    for input in weighted_samples() {
        let steps = bellman_ford(&input, 2).unwrap();
        for step in &steps {
            let from_parents: Vec<EdgeKey> = {
                let mut edges: Vec<_> = step
                    .parents
                    .iter()
                    .enumerate()
                    .filter_map(|(v, p)| p.vertex().map(|p| (p, v)))
                    .collect();
                edges.sort();
                edges
            };
            assert_eq!(step.green_edges, from_parents);
        }
    }
}

#[test]
fn test_unreachable_vertices_stay_infinite() {
    let input = weighted_from_edges(3, &[(0, 1, 2.0)]);
    let steps = bellman_ford(&input, 0).unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last.costs[..2], [0.0, 2.0]);
    assert!(last.costs[2].is_infinite());
    assert_eq!(parent_codes(last), vec![-1, 0, -1]);
}

#[test]
fn test_negative_weight_without_cycle_detection() {
    let input = weighted_from_edges(2, &[(0, 1, -1.0)]);
    let steps = bellman_ford(&input, 0).unwrap();
    let last = steps.last().unwrap();

    assert_eq!(steps.len(), 5);
    assert_eq!(last.costs, vec![-2.0, -1.0]);
    assert_eq!(parent_codes(last), vec![1, 0]);
}

#[test]
fn test_single_vertex_only_initializes() {
    let input = GraphInput::from_adjacency(vec![vec![]]).with_weights(vec![vec![]]);
    let steps = bellman_ford(&input, 0).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].narration, Narration::ShortestPathsInitialized { start: 0 });
}

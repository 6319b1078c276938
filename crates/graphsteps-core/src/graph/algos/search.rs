use std::collections::BTreeSet;
use std::time::Instant;

use crate::error::Result;
use crate::graph::frontier::{FifoFrontier, Frontier, LifoFrontier};
use crate::graph::narration::Narration;
use crate::graph::steps::{SearchStep, StepRecorder};
use crate::graph::types::{EdgeKey, GraphInput, Parent, Vertex, VisitState};
use crate::graph::validate::{validate_start, validate_structure};
use crate::trace_time;

/// Breadth-first search trace from `start`
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn bfs(input: &GraphInput, start: Vertex) -> Result<Vec<SearchStep>> {
    search(input, start, FifoFrontier::new())
}

/// Depth-first search trace from `start`
#[tracing::instrument(skip(input), fields(vertices = input.vertex_count()))]
pub fn dfs(input: &GraphInput, start: Vertex) -> Result<Vec<SearchStep>> {
    search(input, start, LifoFrontier::new())
}

/// Discover/process traversal with an arbitrary frontier discipline
pub fn search<F: Frontier>(input: &GraphInput, start: Vertex, frontier: F) -> Result<Vec<SearchStep>> {
    validate_structure(input, None)?;
    let start = validate_start(input, Some(start))?;
    Ok(run_search(input, start, frontier))
}

struct SearchState<F> {
    frontier: F,
    visited: Vec<VisitState>,
    parents: Vec<Parent>,
    current_vertex: Vertex,
    current_edge: Option<EdgeKey>,
    red_edges: BTreeSet<EdgeKey>,
    green_edges: BTreeSet<EdgeKey>,
    recorder: StepRecorder<SearchStep>,
}

impl<F: Frontier> SearchState<F> {
    fn record(&mut self, narration: Narration) {
        tracing::trace!(step = self.recorder.next_step_number(), ?narration, "search_step");
        let step = SearchStep {
            step_number: self.recorder.next_step_number(),
            current_vertex: self.current_vertex,
            current_edge: self.current_edge,
            visited: self.visited.clone(),
            frontier: self.frontier.snapshot(),
            parents: self.parents.clone(),
            red_edges: self.red_edges.iter().copied().collect(),
            green_edges: self.green_edges.iter().copied().collect(),
            narration,
        };
        self.recorder.push(step);
    }
}

/// Run the traversal on validated input
pub(crate) fn run_search<F: Frontier>(input: &GraphInput, start: Vertex, frontier: F) -> Vec<SearchStep> {
    let begin = Instant::now();
    let n = input.vertex_count();
    let mut state = SearchState {
        frontier,
        visited: vec![VisitState::Unvisited; n],
        parents: vec![Parent::Unassigned; n],
        current_vertex: start,
        current_edge: None,
        red_edges: BTreeSet::new(),
        green_edges: BTreeSet::new(),
        recorder: StepRecorder::new(),
    };

    state.visited[start] = VisitState::Discovered;
    state.frontier.push(start);
    state.record(Narration::TraversalStarted { vertex: start });

    while let Some(vertex) = state.frontier.pop() {
        state.current_vertex = vertex;
        state.current_edge = None;
        state.record(Narration::ProcessingVertex { vertex });

        for &neighbor in input.neighbors(vertex) {
            let edge = (vertex, neighbor);
            state.current_edge = Some(edge);

            let narration = if state.visited[neighbor] == VisitState::Unvisited {
                state.visited[neighbor] = VisitState::Discovered;
                state.parents[neighbor] = Parent::Vertex(vertex);
                state.frontier.push(neighbor);
                state.green_edges.insert(edge);
                Narration::VertexDiscovered {
                    from: vertex,
                    to: neighbor,
                }
            } else if state.parents[vertex] != Parent::Vertex(neighbor) {
                state.red_edges.insert(edge);
                Narration::EdgeRejected {
                    from: vertex,
                    to: neighbor,
                }
            } else {
                state.red_edges.insert(edge);
                Narration::EdgeAlreadyInTree {
                    from: vertex,
                    to: neighbor,
                }
            };
            state.record(narration);
        }

        state.visited[vertex] = VisitState::Closed;
        state.current_edge = None;
        state.record(Narration::VertexClosed { vertex });
    }

    state.current_edge = None;
    state.record(Narration::TraversalFinished);

    trace_time!(begin, "search", steps = state.recorder.len());
    state.recorder.finish()
}

#[cfg(test)]
mod tests;

//! Trace request documents
//!
//! The JSON body describing one graph and where to start:
//!
//! ```json
//! {"vertices": [0, 1, 2], "adjacency_list": [[1], [0, 2], [1]],
//!  "weights": [[4], [4, 1], [1]], "start_vertex": 0}
//! ```

use std::io::Read;

use serde::Deserialize;

use super::types::{GraphInput, Vertex, Weight};
use crate::error::{GraphStepsError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraceRequest {
    pub vertices: Option<Vec<Vertex>>,
    pub adjacency_list: Option<Vec<Vec<Vertex>>>,
    pub weights: Option<Vec<Vec<Weight>>>,
    pub start_vertex: Option<Vertex>,
}

impl TraceRequest {
    /// Parse a request from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| GraphStepsError::invalid_input(format!("malformed request: {}", e)))
    }

    /// Parse a request from a reader producing JSON
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    /// Split into the graph and the requested start vertex
    pub fn into_parts(self) -> Result<(GraphInput, Option<Vertex>)> {
        let vertices = self
            .vertices
            .ok_or_else(|| GraphStepsError::missing_field("vertices"))?;
        let adjacency_list = self
            .adjacency_list
            .ok_or_else(|| GraphStepsError::missing_field("adjacency_list"))?;

        let input = GraphInput {
            vertices,
            adjacency_list,
            weights: self.weights,
        };
        Ok((input, self.start_vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_request() {
        let request = TraceRequest::from_json_str(
            r#"{"vertices": [0, 1], "adjacency_list": [[1], [0]], "weights": [[2.5], [2.5]], "start_vertex": 1}"#,
        )
        .unwrap();
        let (input, start) = request.into_parts().unwrap();
        assert_eq!(input.vertices, vec![0, 1]);
        assert_eq!(input.adjacency_list, vec![vec![1], vec![0]]);
        assert_eq!(input.weights, Some(vec![vec![2.5], vec![2.5]]));
        assert_eq!(start, Some(1));
    }

    #[test]
    fn test_integer_weights_are_accepted() {
        let request = TraceRequest::from_json_str(
            r#"{"vertices": [0, 1], "adjacency_list": [[1], [0]], "weights": [[3], [3]]}"#,
        )
        .unwrap();
        assert_eq!(request.weights, Some(vec![vec![3.0], vec![3.0]]));
        assert_eq!(request.start_vertex, None);
    }

    #[test]
    fn test_missing_fields() {
        let request = TraceRequest::from_json_str(r#"{"vertices": [0]}"#).unwrap();
        let err = request.into_parts().unwrap_err();
        assert!(
            matches!(err, GraphStepsError::MissingField { ref field } if field == "adjacency_list")
        );
    }

    #[test]
    fn test_negative_label_is_invalid_input() {
        let err = TraceRequest::from_json_str(r#"{"vertices": [-1], "adjacency_list": [[]]}"#)
            .unwrap_err();
        assert!(matches!(err, GraphStepsError::InvalidInput { .. }));
    }

    #[test]
    fn test_from_reader() {
        let body = br#"{"vertices": [0], "adjacency_list": [[]], "start_vertex": 0}"#;
        let request = TraceRequest::from_reader(&body[..]).unwrap();
        assert_eq!(request.start_vertex, Some(0));
    }
}

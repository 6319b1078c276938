//! graphsteps core library
//!
//! Step-recording engine for classical graph algorithms. Each algorithm runs
//! to completion on a freshly built input and returns the ordered sequence of
//! state snapshots a front-end needs to animate it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;

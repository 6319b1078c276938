//! CLI commands for graphsteps

pub mod dispatch;
pub mod trace;

//! Step trace renderers, one per output format

pub mod human;
pub mod json;
pub mod records;

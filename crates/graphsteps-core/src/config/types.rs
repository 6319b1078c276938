//! Configuration type definitions

use crate::graph::narration::Locale;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language used when rendering step narrations
    #[serde(default)]
    pub locale: Locale,

    /// Reject inputs with more vertices than this (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertices: Option<usize>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for rendering step sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default true)
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            locale: Locale::default(),
            max_vertices: None,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_pretty_json() -> bool {
    true
}

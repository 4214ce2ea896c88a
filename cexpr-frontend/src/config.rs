//! Parser configuration
//!
//! Loaded from a JSON file by the driver; every field has a default so a
//! partial file (or `{}`) is valid.

use cexpr_common::CompilerError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of nested grammar frames (assignment, conditional,
    /// unary and primary levels) active at once
    pub max_depth: usize,

    /// Name stamped on source locations
    pub filename: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            filename: "<input>".to_string(),
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    pub fn from_json(content: &str) -> Result<Self, CompilerError> {
        let config: ParserConfig = serde_json::from_str(content)
            .map_err(|e| CompilerError::config_error(format!("invalid parser config: {}", e)))?;

        if config.max_depth == 0 {
            return Err(CompilerError::config_error(
                "max_depth must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, CompilerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

//! Engine configuration profile: evaluation weights plus the default
//! cultural era, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cultural::CulturalEra;
use crate::eval::EvalWeights;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: EvalWeights,
    pub era: CulturalEra,
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        Self::from_toml(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        fs::write(path, text).map_err(|e| format!("Failed to write config: {}", e))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

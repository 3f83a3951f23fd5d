//! Plugin configuration - root configuration structure.

use serde::Deserialize;

use crate::error::{Result, SchemaError};

use super::pattern::PatternConfig;
use super::sprocket::SprocketConfig;
use super::trajectory::TrajectoryConfig;
use super::validation::ValidatedConfig;

/// Typed view of a validated document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginConfig {
    /// Optional track name.
    #[serde(default)]
    pub name: Option<String>,

    /// Drive wheel.
    pub sprocket: SprocketConfig,

    /// Track path.
    pub trajectory: TrajectoryConfig,

    /// Repeating elements.
    pub pattern: PatternConfig,
}

impl PluginConfig {
    /// Deserialize a validated document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Malformed` if the document does not fit the typed
    /// layout.
    pub fn from_validated(validated: ValidatedConfig) -> Result<Self> {
        toml::Value::Table(validated.into_table())
            .try_into()
            .map_err(|e: toml::de::Error| SchemaError::Malformed(e.message().to_owned()).into())
    }

    /// Number of trajectory segments.
    pub fn segment_count(&self) -> usize {
        self.trajectory.segments.len()
    }

    /// Number of pattern elements.
    pub fn element_count(&self) -> usize {
        self.pattern.elements.len()
    }
}

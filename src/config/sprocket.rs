//! Sprocket configuration.

use serde::Deserialize;

use super::units::Meters;

/// Sprocket section of a validated document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SprocketConfig {
    /// Name of the rotational joint driving the track.
    pub joint: String,

    /// Pitch diameter in metres.
    pub pitch_diameter: Meters,
}

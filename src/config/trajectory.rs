//! Trajectory configuration.

use serde::Deserialize;

use super::units::JointPosition;

/// Trajectory section of a validated document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrajectoryConfig {
    /// Segments in traversal order.
    #[serde(rename = "segment")]
    pub segments: Vec<SegmentConfig>,
}

/// One leg of the track path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentConfig {
    /// Name of the rotational or translational joint moving along this leg.
    pub joint: String,

    /// Joint position at the end of the leg.
    pub end_position: JointPosition,
}

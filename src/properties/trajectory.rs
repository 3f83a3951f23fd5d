//! Trajectory loading.

use crate::config::units::JointPosition;
use crate::config::TrajectoryConfig;
use crate::error::Result;
use crate::model::{resolve_joint, JointHandle, KinematicModel, MotionTypes};

use super::ensure_positive;

/// Closed path the track follows.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Segments in traversal order.
    pub segments: Vec<Segment>,
}

/// One leg of the track path.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Rotational or translational joint moving along this leg.
    pub joint: JointHandle,
    /// Joint position at the end of the leg (rad or m).
    pub end_position: JointPosition,
}

impl Trajectory {
    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the trajectory has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get an iterator over segments in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

/// Bind and check every trajectory segment, keeping document order.
///
/// # Errors
///
/// Fails on the first segment whose joint is missing or neither rotational nor
/// translational, or whose end position is not strictly positive. No partial
/// trajectory is returned.
pub fn load_trajectory<M>(model: &M, config: &TrajectoryConfig) -> Result<Trajectory>
where
    M: KinematicModel + ?Sized,
{
    let allowed = MotionTypes::ROTATIONAL | MotionTypes::TRANSLATIONAL;

    let segments = config
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let path = format!("trajectory::segment[{}]", index);
            let joint = resolve_joint(model, &segment.joint, allowed, &format!("{}::joint", path))?;
            let end_position =
                ensure_positive(segment.end_position.0, &format!("{}::end_position", path))?;

            Ok(Segment {
                joint,
                end_position: JointPosition(end_position),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(segments = segments.len(), "loaded trajectory");

    Ok(Trajectory { segments })
}

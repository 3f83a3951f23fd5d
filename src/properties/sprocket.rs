//! Sprocket loading.

use crate::config::units::Meters;
use crate::config::SprocketConfig;
use crate::error::Result;
use crate::model::{resolve_joint, JointHandle, KinematicModel, MotionTypes};

use super::ensure_positive;

/// Drive wheel of the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprocket {
    /// Rotational joint driving the track.
    pub joint: JointHandle,
    /// Pitch diameter.
    pub pitch_diameter: Meters,
}

impl Sprocket {
    /// Pitch radius: scale from sprocket joint position to length along the track.
    #[inline]
    pub fn pitch_radius(&self) -> Meters {
        self.pitch_diameter / 2.0
    }
}

/// Bind and check the sprocket section.
///
/// # Errors
///
/// Returns a resolution error if the joint is missing or not rotational, and
/// `RangeError::NotPositive` if the pitch diameter is not strictly positive.
pub fn load_sprocket<M>(model: &M, config: &SprocketConfig) -> Result<Sprocket>
where
    M: KinematicModel + ?Sized,
{
    let joint = resolve_joint(model, &config.joint, MotionTypes::ROTATIONAL, "sprocket::joint")?;
    let pitch_diameter = ensure_positive(config.pitch_diameter.0, "sprocket::pitch_diameter")?;

    tracing::debug!(joint = joint.name(), pitch_diameter, "loaded sprocket");

    Ok(Sprocket {
        joint,
        pitch_diameter: Meters(pitch_diameter),
    })
}

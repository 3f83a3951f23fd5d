//! Joint name resolution.

use crate::error::{ResolutionError, Result};

use super::{JointHandle, KinematicModel, MotionTypes};

/// Bind a joint name to a joint of the model.
///
/// `path` names the document element holding the joint name and is only used in
/// diagnostics.
///
/// # Errors
///
/// Returns `ResolutionError::JointNotFound` if the model has no such joint, and
/// `ResolutionError::UnexpectedJointKind` if the joint provides none of the
/// `allowed` motion types.
pub fn resolve_joint<M>(
    model: &M,
    name: &str,
    allowed: MotionTypes,
    path: &str,
) -> Result<JointHandle>
where
    M: KinematicModel + ?Sized,
{
    let not_found = || ResolutionError::JointNotFound {
        path: path.to_owned(),
        joint: name.to_owned(),
    };

    let id = model.find_joint(name).ok_or_else(not_found)?;
    let kind = model.joint_kind(id).ok_or_else(not_found)?;

    if !kind.allows(allowed) {
        return Err(ResolutionError::UnexpectedJointKind {
            path: path.to_owned(),
            joint: name.to_owned(),
            kind,
            allowed,
        }
        .into());
    }

    tracing::debug!(joint = name, %kind, path, "resolved joint");

    Ok(JointHandle {
        id,
        name: name.to_owned(),
        kind,
    })
}

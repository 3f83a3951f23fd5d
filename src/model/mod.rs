//! Kinematic model seam.
//!
//! The host simulation owns the live model. This crate only needs to look joints up
//! by name, classify them, and (for the track layout) read their world geometry,
//! which is what [`KinematicModel`] exposes. [`JointTable`] is an in-memory
//! implementation for hosts that mirror their model and for tests.

mod resolver;
mod table;

use core::fmt;

use nalgebra::{Point3, Vector3};

pub use resolver::resolve_joint;
pub use table::JointTable;

/// Index of a joint in the model's joint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JointId(pub usize);

impl JointId {
    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Mechanical type of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    /// Hinge: rotation about one axis.
    Revolute,
    /// Slider: translation along one axis.
    Prismatic,
    /// Spherical joint.
    Ball,
    /// Two-axis rotational joint.
    Universal,
    /// Rigid connection.
    Fixed,
    /// Unconstrained floating joint.
    Free,
}

impl JointKind {
    /// Motion types this kind of joint provides.
    ///
    /// Only single-axis hinges and sliders count; a ball or universal joint rotates
    /// but cannot drive a track.
    pub fn motion_types(self) -> MotionTypes {
        match self {
            JointKind::Revolute => MotionTypes::ROTATIONAL,
            JointKind::Prismatic => MotionTypes::TRANSLATIONAL,
            JointKind::Ball | JointKind::Universal | JointKind::Fixed | JointKind::Free => {
                MotionTypes::empty()
            }
        }
    }

    /// Check if the joint provides any of the given motion types.
    #[inline]
    pub fn allows(self, allowed: MotionTypes) -> bool {
        self.motion_types().intersects(allowed)
    }
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JointKind::Revolute => "revolute",
            JointKind::Prismatic => "prismatic",
            JointKind::Ball => "ball",
            JointKind::Universal => "universal",
            JointKind::Fixed => "fixed",
            JointKind::Free => "free",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Set of joint motion types accepted at a joint reference.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MotionTypes: u8 {
        /// Hinge-type motion.
        const ROTATIONAL = 0b0000_0001;
        /// Slider-type motion.
        const TRANSLATIONAL = 0b0000_0010;
    }
}

/// World-frame geometry of a joint at its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointGeometry {
    /// Joint anchor point.
    pub anchor: Point3<f64>,
    /// Joint axis direction (need not be normalized).
    pub axis: Vector3<f64>,
    /// Origin of the joint's child link.
    pub child_origin: Point3<f64>,
}

impl JointGeometry {
    /// Distance from the child link origin to the joint axis line.
    ///
    /// Returns `None` if the axis has zero length.
    pub fn distance_to_axis(&self) -> Option<f64> {
        let axis = self.axis.try_normalize(f64::EPSILON)?;
        let offset = self.child_origin - self.anchor;
        Some((offset - axis * offset.dot(&axis)).norm())
    }
}

/// Non-owning handle on a joint of the live model.
///
/// Holds the joint's index plus the name and kind it was resolved with; it never
/// keeps the model alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JointHandle {
    /// Index in the model's joint table.
    pub id: JointId,
    /// Name the joint was resolved by.
    pub name: String,
    /// Kind of the joint at resolution time.
    pub kind: JointKind,
}

impl JointHandle {
    /// Joint name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Check if the joint is a hinge.
    #[inline]
    pub fn is_rotational(&self) -> bool {
        self.kind.motion_types().contains(MotionTypes::ROTATIONAL)
    }

    /// Check if the joint is a slider.
    #[inline]
    pub fn is_translational(&self) -> bool {
        self.kind.motion_types().contains(MotionTypes::TRANSLATIONAL)
    }
}

/// Read-only view of the host's kinematic model.
pub trait KinematicModel {
    /// Look a joint up by name.
    fn find_joint(&self, name: &str) -> Option<JointId>;

    /// Kind of a joint, or `None` if the id is unknown.
    fn joint_kind(&self, joint: JointId) -> Option<JointKind>;

    /// World-frame geometry of a joint, if the model can provide it.
    fn joint_geometry(&self, joint: JointId) -> Option<JointGeometry> {
        let _ = joint;
        None
    }
}

impl<M: KinematicModel + ?Sized> KinematicModel for &M {
    fn find_joint(&self, name: &str) -> Option<JointId> {
        (**self).find_joint(name)
    }

    fn joint_kind(&self, joint: JointId) -> Option<JointKind> {
        (**self).joint_kind(joint)
    }

    fn joint_geometry(&self, joint: JointId) -> Option<JointGeometry> {
        (**self).joint_geometry(joint)
    }
}

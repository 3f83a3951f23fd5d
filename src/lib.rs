//! # continuous-track
//!
//! Configuration loading, validation and joint binding for continuous (tank-style)
//! track mechanisms.
//!
//! ## Features
//!
//! - **Format-checked documents**: Every document is validated against a canonical
//!   format definition before any field is read
//! - **Joint binding**: Joint names resolve to handles on the host's kinematic model,
//!   with motion-type checks
//! - **Typed errors**: Every failure names the offending element path
//! - **Opaque shapes**: Collision and visual descriptors are deep-copied, never
//!   interpreted
//! - **Track layout**: Segment lengths, element placement and variant selection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use continuous_track::{load_document, JointKind, JointTable, Properties};
//!
//! // Mirror the joints of the host model
//! let model = JointTable::new()
//!     .with_joint("sprocket_joint", JointKind::Revolute)
//!     .with_joint("bottom_joint", JointKind::Prismatic);
//!
//! // Load and bind the track description
//! let document = load_document("left_track.toml")?;
//! let properties = Properties::load(&model, &document)?;
//!
//! println!("pitch radius: {}", properties.sprocket().pitch_radius().value());
//! ```
//!
//! ## Document layout
//!
//! ```toml
//! [sprocket]
//! joint = "sprocket_joint"
//! pitch_diameter = 0.3
//!
//! [[trajectory.segment]]
//! joint = "bottom_joint"
//! end_position = 1.5
//!
//! [pattern]
//! elements_per_round = 20
//!
//! [[pattern.element]]
//! [[pattern.element.collision]]
//! name = "shoe"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Errors carry element paths and joint names
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod properties;

// Re-exports for ergonomic API
pub use config::{load_document, validate_config, ConfigDocument, FormatDefinition, ShapeDescriptor};
pub use error::{Error, Result};
pub use layout::{Placement, TrackLayout};
pub use model::{JointHandle, JointId, JointKind, JointTable, KinematicModel, MotionTypes};
pub use properties::{Element, Pattern, Properties, Segment, Sprocket, Trajectory};

// Unit types
pub use config::units::{JointPosition, Meters};

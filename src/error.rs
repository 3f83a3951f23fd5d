//! Error types for continuous-track.
//!
//! Every failure of the parse-validate-bind pipeline is reported through [`Error`],
//! carrying the path of the offending element (for example
//! `trajectory::segment[1]::end_position`).

use core::fmt;

use crate::model::{JointKind, MotionTypes};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all continuous-track operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Document does not conform to the format definition
    Schema(SchemaError),
    /// A joint reference could not be bound to the model
    Resolution(ResolutionError),
    /// A numeric field violates its range constraint
    Range(RangeError),
    /// Track layout could not be composed
    Layout(LayoutError),
    /// A document or format file could not be read
    Io {
        /// File that was being read
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

/// Document format errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Document is not well-formed TOML
    Malformed(String),
    /// A required element is absent (or a one-or-more element is empty)
    MissingElement {
        /// Path of the missing element
        path: String,
    },
    /// An element value cannot be coerced to its declared type
    TypeMismatch {
        /// Path of the offending element
        path: String,
        /// Declared type
        expected: &'static str,
        /// Type found in the document
        found: &'static str,
    },
    /// The format definition itself is broken
    InvalidFormat(String),
}

/// Joint binding errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionError {
    /// No joint with the given name exists in the model
    JointNotFound {
        /// Path of the element holding the joint name
        path: String,
        /// Joint name that was looked up
        joint: String,
    },
    /// The joint exists but its motion type is not allowed here
    UnexpectedJointKind {
        /// Path of the element holding the joint name
        path: String,
        /// Joint name
        joint: String,
        /// Actual kind of the joint
        kind: JointKind,
        /// Motion types accepted at this path
        allowed: MotionTypes,
    },
}

/// Numeric range errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Value must be strictly positive and finite
    NotPositive {
        /// Path of the offending element
        path: String,
        /// Value found
        value: f64,
    },
    /// Value does not fit the target integer type
    OutOfRange {
        /// Path of the offending element
        path: String,
        /// Value found
        value: i64,
    },
}

/// Track layout errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The model has no geometry for a bound joint
    MissingGeometry {
        /// Joint name
        joint: String,
    },
    /// A rotational joint has a zero-length axis
    DegenerateAxis {
        /// Joint name
        joint: String,
    },
    /// The child link of a rotational segment lies on the joint axis
    ZeroRadius {
        /// Joint name
        joint: String,
    },
    /// More elements per round than a layout can place
    TooManyElements {
        /// Elements per round requested by the pattern
        elements_per_round: usize,
        /// Largest supported count
        max: usize,
    },
    /// Perimeter and element count do not give a usable element pitch
    InvalidPitch {
        /// Track perimeter
        perimeter: f64,
        /// Elements per round
        elements_per_round: usize,
    },
    /// Requested variant does not exist
    VariantOutOfRange {
        /// Requested variant
        variant: usize,
        /// Number of variants
        count: usize,
    },
    /// Requested segment does not exist
    SegmentOutOfRange {
        /// Requested segment
        segment: usize,
        /// Number of segments
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(e) => write!(f, "Schema error: {}", e),
            Error::Resolution(e) => write!(f, "Resolution error: {}", e),
            Error::Range(e) => write!(f, "Range error: {}", e),
            Error::Layout(e) => write!(f, "Layout error: {}", e),
            Error::Io { path, message } => write!(f, "I/O error reading '{}': {}", path, message),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Malformed(msg) => write!(f, "Malformed document: {}", msg),
            SchemaError::MissingElement { path } => {
                write!(f, "Missing required element [{}]", path)
            }
            SchemaError::TypeMismatch {
                path,
                expected,
                found,
            } => write!(f, "[{}] must be {}, found {}", path, expected, found),
            SchemaError::InvalidFormat(msg) => write!(f, "Invalid format definition: {}", msg),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::JointNotFound { path, joint } => {
                write!(f, "Cannot find joint '{}' named by [{}]", joint, path)
            }
            ResolutionError::UnexpectedJointKind {
                path,
                joint,
                kind,
                allowed,
            } => write!(
                f,
                "[{}] joint '{}' is {}, expected {}",
                path,
                joint,
                kind,
                describe_motion_types(*allowed)
            ),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NotPositive { path, value } => {
                write!(f, "[{}] must be a positive finite number, found {}", path, value)
            }
            RangeError::OutOfRange { path, value } => {
                write!(f, "[{}] value {} is out of range", path, value)
            }
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingGeometry { joint } => {
                write!(f, "No geometry available for joint '{}'", joint)
            }
            LayoutError::DegenerateAxis { joint } => {
                write!(f, "Joint '{}' has a zero-length axis", joint)
            }
            LayoutError::ZeroRadius { joint } => {
                write!(f, "Child link of joint '{}' lies on the joint axis", joint)
            }
            LayoutError::TooManyElements {
                elements_per_round,
                max,
            } => write!(
                f,
                "{} elements per round exceeds the supported maximum of {}",
                elements_per_round, max
            ),
            LayoutError::InvalidPitch {
                perimeter,
                elements_per_round,
            } => write!(
                f,
                "Perimeter {} with {} elements per round gives no usable element pitch",
                perimeter, elements_per_round
            ),
            LayoutError::VariantOutOfRange { variant, count } => {
                write!(f, "Variant {} out of range (count {})", variant, count)
            }
            LayoutError::SegmentOutOfRange { segment, count } => {
                write!(f, "Segment {} out of range (count {})", segment, count)
            }
        }
    }
}

fn describe_motion_types(allowed: MotionTypes) -> &'static str {
    if allowed == MotionTypes::ROTATIONAL {
        "a rotational joint"
    } else if allowed == MotionTypes::TRANSLATIONAL {
        "a translational joint"
    } else if allowed == MotionTypes::ROTATIONAL | MotionTypes::TRANSLATIONAL {
        "a rotational or translational joint"
    } else {
        "no joint"
    }
}

// Conversion impls
impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Error::Schema(e)
    }
}

impl From<ResolutionError> for Error {
    fn from(e: ResolutionError) -> Self {
        Error::Resolution(e)
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Range(e)
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Error::Layout(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for SchemaError {}

impl std::error::Error for ResolutionError {}

impl std::error::Error for RangeError {}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_path() {
        let err = Error::from(RangeError::NotPositive {
            path: "trajectory::segment[1]::end_position".into(),
            value: -0.5,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("Range error"));
        assert!(msg.contains("trajectory::segment[1]::end_position"));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn test_unexpected_kind_message() {
        let err = ResolutionError::UnexpectedJointKind {
            path: "sprocket::joint".into(),
            joint: "slider".into(),
            kind: JointKind::Prismatic,
            allowed: MotionTypes::ROTATIONAL,
        };
        assert_eq!(
            err.to_string(),
            "[sprocket::joint] joint 'slider' is prismatic, expected a rotational joint"
        );
    }
}

//! Configuration module for continuous-track.
//!
//! Provides the raw document type, the canonical format definition, validation of
//! documents against it, and the typed view the property loaders read from.

mod document;
mod format;
mod loader;
mod pattern;
mod plugin;
mod sprocket;
mod trajectory;
pub mod units;
mod validation;

pub use document::ConfigDocument;
pub use format::{ElementFormat, FormatDefinition, Multiplicity, ValueType, FORMAT_RELATIVE_PATH};
pub use loader::load_document;
pub use pattern::{ElementConfig, PatternConfig, ShapeDescriptor};
pub use plugin::PluginConfig;
pub use sprocket::SprocketConfig;
pub use trajectory::{SegmentConfig, TrajectoryConfig};
pub use validation::{validate_config, ValidatedConfig};

// Re-export unit types at config level
pub use units::{JointPosition, Meters};

/// Join an element name onto its parent path (`parent::name`).
pub(crate) fn element_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{}::{}", parent, name)
    }
}

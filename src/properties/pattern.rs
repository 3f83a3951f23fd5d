//! Pattern loading.

use crate::config::{PatternConfig, ShapeDescriptor};
use crate::error::Result;

use super::ensure_positive_count;

/// Repeating elements tiled along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Number of elements placed around the whole track.
    ///
    /// Not cross-checked against `elements.len()`.
    pub elements_per_round: usize,
    /// Elements in document order.
    pub elements: Vec<Element>,
}

/// One repeating geometric unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Collision shapes, each an independent copy.
    pub collision_sdfs: Vec<ShapeDescriptor>,
    /// Visual shapes, each an independent copy.
    pub visual_sdfs: Vec<ShapeDescriptor>,
}

impl Pattern {
    /// Get the number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the pattern has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Check the pattern section and copy its shape descriptors.
///
/// # Errors
///
/// Returns `RangeError::NotPositive` if `elements_per_round` is zero or negative.
pub fn load_pattern(config: &PatternConfig) -> Result<Pattern> {
    let elements_per_round =
        ensure_positive_count(config.elements_per_round, "pattern::elements_per_round")?;

    let elements: Vec<Element> = config
        .elements
        .iter()
        .map(|element| Element {
            collision_sdfs: element.collisions.clone(),
            visual_sdfs: element.visuals.clone(),
        })
        .collect();

    tracing::debug!(elements_per_round, elements = elements.len(), "loaded pattern");

    Ok(Pattern {
        elements_per_round,
        elements,
    })
}

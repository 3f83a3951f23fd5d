//! Track properties: the validated, joint-bound description of one track.

mod pattern;
mod sprocket;
mod trajectory;

pub use pattern::{load_pattern, Element, Pattern};
pub use sprocket::{load_sprocket, Sprocket};
pub use trajectory::{load_trajectory, Segment, Trajectory};

use crate::config::{validate_config, ConfigDocument, FormatDefinition, PluginConfig};
use crate::error::{RangeError, Result};
use crate::model::KinematicModel;

/// Sprocket, trajectory and pattern of one track.
///
/// Built once from a model and a document and never modified afterwards. Joint
/// handles refer into the model, which must outlive every use of them.
///
/// # Example
///
/// ```rust,ignore
/// use continuous_track::{load_document, Properties};
///
/// let document = load_document("left_track.toml")?;
/// let properties = Properties::load(&model, &document)?;
/// println!("{} segments", properties.trajectory().len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    name: Option<String>,
    sprocket: Sprocket,
    trajectory: Trajectory,
    pattern: Pattern,
}

impl Properties {
    /// Validate a document against the canonical format and bind it to the model.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the document does not conform to the format, a
    /// resolution error if a joint reference cannot be bound, and a range error if a
    /// numeric field is not strictly positive.
    pub fn load<M>(model: &M, document: &ConfigDocument) -> Result<Self>
    where
        M: KinematicModel + ?Sized,
    {
        Self::load_with_format(model, document, FormatDefinition::canonical()?)
    }

    /// Like [`load`](Self::load), validating against a caller-supplied format.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_format<M>(
        model: &M,
        document: &ConfigDocument,
        format: &FormatDefinition,
    ) -> Result<Self>
    where
        M: KinematicModel + ?Sized,
    {
        let validated = validate_config(document, format)?;
        let config = PluginConfig::from_validated(validated)?;
        Self::from_config(model, &config)
    }

    fn from_config<M>(model: &M, config: &PluginConfig) -> Result<Self>
    where
        M: KinematicModel + ?Sized,
    {
        let span = tracing::info_span!(
            "continuous_track",
            plugin = config.name.as_deref().unwrap_or("unnamed")
        );
        let _enter = span.enter();

        let sprocket = load_sprocket(model, &config.sprocket)?;
        let trajectory = load_trajectory(model, &config.trajectory)?;
        let pattern = load_pattern(&config.pattern)?;

        tracing::info!(
            segments = trajectory.len(),
            elements = pattern.len(),
            elements_per_round = pattern.elements_per_round,
            "loaded track properties"
        );

        Ok(Self {
            name: config.name.clone(),
            sprocket,
            trajectory,
            pattern,
        })
    }

    /// Track name, if the document gave one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Drive wheel.
    pub fn sprocket(&self) -> &Sprocket {
        &self.sprocket
    }

    /// Track path.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Repeating elements.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Hand the three groups over to a consumer.
    pub fn into_parts(self) -> (Sprocket, Trajectory, Pattern) {
        (self.sprocket, self.trajectory, self.pattern)
    }
}

/// Strictly positive finite real. NaN and infinities are rejected.
pub(crate) fn ensure_positive(value: f64, path: &str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RangeError::NotPositive {
            path: path.to_owned(),
            value,
        }
        .into())
    }
}

/// Strictly positive count that fits in `usize`.
pub(crate) fn ensure_positive_count(value: i64, path: &str) -> Result<usize> {
    if value <= 0 {
        return Err(RangeError::NotPositive {
            path: path.to_owned(),
            value: value as f64,
        }
        .into());
    }

    usize::try_from(value).map_err(|_| {
        RangeError::OutOfRange {
            path: path.to_owned(),
            value,
        }
        .into()
    })
}

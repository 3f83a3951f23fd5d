//! Canonical format definition.
//!
//! The format describes which elements a configuration document must contain, how
//! often, and with which value types. It ships with the package at
//! [`FORMAT_RELATIVE_PATH`]; the copy embedded at build time is parsed once per
//! process and shared by every validation.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Result, SchemaError};

use super::element_path;

/// Location of the format definition relative to the package root.
pub const FORMAT_RELATIVE_PATH: &str = "format/continuous_track.toml";

const CANONICAL_FORMAT: &str = include_str!("../../format/continuous_track.toml");

static CANONICAL: OnceLock<Result<FormatDefinition>> = OnceLock::new();

/// How many times an element may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Multiplicity {
    /// Optional, at most once.
    #[serde(rename = "0")]
    ZeroOrOne,
    /// Exactly once.
    #[serde(rename = "1")]
    One,
    /// At least once.
    #[serde(rename = "+")]
    OneOrMore,
    /// Any number of times.
    #[serde(rename = "*")]
    ZeroOrMore,
}

impl Multiplicity {
    /// Check if the element must be present.
    #[inline]
    pub fn is_required(self) -> bool {
        matches!(self, Multiplicity::One | Multiplicity::OneOrMore)
    }

    /// Check if the element may occur more than once.
    #[inline]
    pub fn is_repeated(self) -> bool {
        matches!(self, Multiplicity::OneOrMore | Multiplicity::ZeroOrMore)
    }
}

/// Declared type of a scalar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Text.
    String,
    /// Real number.
    Double,
    /// Signed integer.
    Int,
}

impl ValueType {
    /// Type name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Double => "double",
            ValueType::Int => "int",
        }
    }
}

/// Format of one element and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFormat {
    /// Element name.
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Allowed number of occurrences.
    pub required: Multiplicity,
    /// Scalar type, or `None` for an element with children.
    pub value_type: Option<ValueType>,
    /// Content is kept verbatim and never inspected.
    pub copy_data: bool,
    /// Child element formats, in declaration order.
    pub elements: Vec<ElementFormat>,
}

impl ElementFormat {
    /// Get a child element format by name.
    pub fn element(&self, name: &str) -> Option<&ElementFormat> {
        self.elements.iter().find(|e| e.name == name)
    }
}

/// A parsed format definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDefinition {
    description: Option<String>,
    elements: Vec<ElementFormat>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFormat {
    #[serde(default)]
    description: Option<String>,
    elements: toml::Table,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElement {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type", default)]
    value_type: Option<ValueType>,
    required: Multiplicity,
    #[serde(default)]
    copy_data: bool,
    #[serde(default)]
    elements: toml::Table,
}

impl FormatDefinition {
    /// The canonical format shipped with this crate.
    ///
    /// Parsed on first use; later calls return the same instance.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidFormat` if the embedded definition is broken.
    pub fn canonical() -> Result<&'static FormatDefinition> {
        CANONICAL
            .get_or_init(|| {
                tracing::debug!(path = FORMAT_RELATIVE_PATH, "loading canonical format");
                FormatDefinition::parse(CANONICAL_FORMAT)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Load the format definition shipped under a package root.
    ///
    /// Reads `<package_root>/format/continuous_track.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid format.
    pub fn load<P: AsRef<Path>>(package_root: P) -> Result<Self> {
        let path = package_root.as_ref().join(FORMAT_RELATIVE_PATH);
        let content = super::loader::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse a format definition from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidFormat` if the text is not a valid format.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawFormat = toml::from_str(content)
            .map_err(|e| SchemaError::InvalidFormat(e.message().to_owned()))?;

        Ok(Self {
            description: raw.description,
            elements: convert_elements(raw.elements, "")?,
        })
    }

    /// Top-level element formats, in declaration order.
    pub fn elements(&self) -> &[ElementFormat] {
        &self.elements
    }

    /// Get a top-level element format by name.
    pub fn element(&self, name: &str) -> Option<&ElementFormat> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn convert_elements(table: toml::Table, parent: &str) -> Result<Vec<ElementFormat>> {
    table
        .into_iter()
        .map(|(name, value)| {
            let path = element_path(parent, &name);
            let raw: RawElement = value.try_into().map_err(|e: toml::de::Error| {
                SchemaError::InvalidFormat(format!("[{}]: {}", path, e.message()))
            })?;
            convert_element(name, raw, &path)
        })
        .collect()
}

fn convert_element(name: String, raw: RawElement, path: &str) -> Result<ElementFormat> {
    if raw.copy_data && (raw.value_type.is_some() || !raw.elements.is_empty()) {
        return Err(SchemaError::InvalidFormat(format!(
            "[{}]: copy_data elements cannot declare a type or children",
            path
        ))
        .into());
    }

    if raw.value_type.is_some() && !raw.elements.is_empty() {
        return Err(SchemaError::InvalidFormat(format!(
            "[{}]: typed elements cannot have children",
            path
        ))
        .into());
    }

    Ok(ElementFormat {
        name,
        description: raw.description,
        required: raw.required,
        value_type: raw.value_type,
        copy_data: raw.copy_data,
        elements: convert_elements(raw.elements, path)?,
    })
}

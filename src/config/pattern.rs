//! Pattern configuration and opaque shape descriptors.

use serde::Deserialize;

/// Pattern section of a validated document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternConfig {
    /// Number of elements around the whole track.
    ///
    /// Signed so that zero and negative values reach the range check.
    pub elements_per_round: i64,

    /// Repeating elements in document order.
    #[serde(rename = "element")]
    pub elements: Vec<ElementConfig>,
}

/// One repeating unit of the pattern.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ElementConfig {
    /// Collision shapes.
    #[serde(rename = "collision", default)]
    pub collisions: Vec<ShapeDescriptor>,

    /// Visual shapes.
    #[serde(rename = "visual", default)]
    pub visuals: Vec<ShapeDescriptor>,
}

/// Collision or visual shape, kept as an uninterpreted table.
///
/// Its layout belongs to whoever instantiates the geometry. Cloning a descriptor
/// deep-copies the table, so every copy is independent of the document and of
/// every other copy.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct ShapeDescriptor(toml::Table);

impl ShapeDescriptor {
    /// Wrap a table.
    pub fn new(table: toml::Table) -> Self {
        Self(table)
    }

    /// Borrow the table.
    pub fn as_table(&self) -> &toml::Table {
        &self.0
    }

    /// Mutably borrow the table.
    pub fn as_table_mut(&mut self) -> &mut toml::Table {
        &mut self.0
    }

    /// Take the table.
    pub fn into_table(self) -> toml::Table {
        self.0
    }

    /// Value of the `name` key, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(toml::Value::as_str)
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.0.get(key)
    }
}

impl From<toml::Table> for ShapeDescriptor {
    fn from(table: toml::Table) -> Self {
        Self::new(table)
    }
}

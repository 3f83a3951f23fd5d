//! Raw configuration documents.

use core::str::FromStr;

use crate::error::{Result, SchemaError};

/// A configuration document as supplied by the host, before validation.
///
/// Wraps an order-preserving TOML table. Nothing in it has been checked yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDocument {
    table: toml::Table,
}

impl ConfigDocument {
    /// Parse a document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Malformed` if the text is not well-formed TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let table = toml::Table::from_str(content)
            .map_err(|e| SchemaError::Malformed(e.message().to_owned()))?;
        Ok(Self { table })
    }

    /// Wrap an already-parsed table.
    pub fn from_table(table: toml::Table) -> Self {
        Self { table }
    }

    /// Borrow the underlying table.
    pub fn as_table(&self) -> &toml::Table {
        &self.table
    }

    /// Serialize the document back to TOML text.
    pub fn to_toml_string(&self) -> String {
        self.table.to_string()
    }
}

impl FromStr for ConfigDocument {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<toml::Table> for ConfigDocument {
    fn from(table: toml::Table) -> Self {
        Self::from_table(table)
    }
}

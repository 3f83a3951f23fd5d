//! Document validation against a format definition.

use toml::{Table, Value};

use crate::error::{Result, SchemaError};

use super::document::ConfigDocument;
use super::element_path;
use super::format::{ElementFormat, FormatDefinition, Multiplicity, ValueType};

/// A document that conforms to a format definition.
///
/// Every required element is present with its declared type, scalars are coerced
/// to that type, repeated elements are always arrays (empty when a zero-or-more
/// element is absent), and elements unknown to the format are gone.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    table: Table,
}

impl ValidatedConfig {
    /// Borrow the normalized table.
    pub fn as_table(&self) -> &Table {
        &self.table
    }

    /// Take the normalized table.
    pub fn into_table(self) -> Table {
        self.table
    }
}

/// Validate a document against a format definition.
///
/// Checks:
/// - Required elements are present (one-or-more elements are non-empty)
/// - Scalar values can be coerced to their declared type
/// - Single elements are not given as arrays
/// - Elements with children are tables
///
/// # Errors
///
/// Returns `SchemaError::MissingElement` or `SchemaError::TypeMismatch` for the
/// first offending element, in format declaration order.
pub fn validate_config(
    document: &ConfigDocument,
    format: &FormatDefinition,
) -> Result<ValidatedConfig> {
    let table = validate_children(document.as_table(), format.elements(), "")?;
    Ok(ValidatedConfig { table })
}

fn validate_children(source: &Table, formats: &[ElementFormat], parent: &str) -> Result<Table> {
    for key in source.keys() {
        if !formats.iter().any(|f| f.name == *key) {
            tracing::warn!(
                element = %element_path(parent, key),
                "element not defined in format, ignoring"
            );
        }
    }

    let mut normalized = Table::new();

    for format in formats {
        let path = element_path(parent, &format.name);

        match source.get(&format.name) {
            None if format.required.is_required() => {
                return Err(SchemaError::MissingElement { path }.into());
            }
            None if format.required == Multiplicity::ZeroOrMore => {
                normalized.insert(format.name.clone(), Value::Array(Vec::new()));
            }
            None => {}
            Some(value) if format.required.is_repeated() => {
                let items: Vec<&Value> = match value {
                    Value::Array(items) => items.iter().collect(),
                    single => vec![single],
                };

                if items.is_empty() && format.required.is_required() {
                    return Err(SchemaError::MissingElement { path }.into());
                }

                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        validate_value(item, format, &format!("{}[{}]", path, index))
                    })
                    .collect::<Result<Vec<_>>>()?;

                normalized.insert(format.name.clone(), Value::Array(items));
            }
            Some(value) => {
                let value = validate_value(value, format, &path)?;
                normalized.insert(format.name.clone(), value);
            }
        }
    }

    Ok(normalized)
}

fn validate_value(value: &Value, format: &ElementFormat, path: &str) -> Result<Value> {
    if format.copy_data {
        return match value {
            Value::Table(_) => Ok(value.clone()),
            other => Err(mismatch(path, "table", other)),
        };
    }

    match (format.value_type, value) {
        (Some(value_type), value) => coerce(value, value_type, path),
        (None, Value::Table(table)) => Ok(Value::Table(validate_children(
            table,
            &format.elements,
            path,
        )?)),
        (None, other) => Err(mismatch(path, "table", other)),
    }
}

fn coerce(value: &Value, value_type: ValueType, path: &str) -> Result<Value> {
    let coerced = match (value_type, value) {
        (ValueType::String, Value::String(_)) => Some(value.clone()),
        (ValueType::Double, Value::Float(_)) => Some(value.clone()),
        (ValueType::Double, Value::Integer(i)) => Some(Value::Float(*i as f64)),
        (ValueType::Double, Value::String(s)) => s.trim().parse::<f64>().ok().map(Value::Float),
        (ValueType::Int, Value::Integer(_)) => Some(value.clone()),
        (ValueType::Int, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::Integer),
        _ => None,
    };

    coerced.ok_or_else(|| mismatch(path, value_type.name(), value))
}

fn mismatch(path: &str, expected: &'static str, found: &Value) -> crate::error::Error {
    SchemaError::TypeMismatch {
        path: path.to_owned(),
        expected,
        found: found.type_str(),
    }
    .into()
}

//! Configuration loading from files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::document::ConfigDocument;

/// Load a configuration document from a TOML file.
///
/// The document is parsed but not validated; hand it to
/// [`Properties::load`](crate::Properties::load).
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not well-formed TOML.
///
/// # Example
///
/// ```rust,ignore
/// use continuous_track::load_document;
///
/// let document = load_document("left_track.toml")?;
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    let content = read_to_string(path.as_ref())?;
    ConfigDocument::parse(&content)
}

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

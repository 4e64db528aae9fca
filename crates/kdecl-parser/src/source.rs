//! Reading source files from disk.

use std::path::Path;

use crate::error::ParserError;
use crate::normalize::trim_indent;

/// Read a source file and trim-indent its whole content.
///
/// # Errors
/// Returns `ParserError::InputUnavailable` if the file cannot be read.
pub fn load_source(path: &Path) -> Result<String, ParserError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ParserError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded source");
    Ok(trim_indent(&raw))
}

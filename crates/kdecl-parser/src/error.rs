//! Parser error types for kdecl-parser.

use std::path::PathBuf;

/// Errors that can occur while loading or parsing a Kotlin source file.
///
/// The extractor itself never fails: missing sub-structure is treated as
/// empty. Only the two boundaries around it can.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("cannot read input file {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse failed at line {line}, column {column}: {detail}")]
    ParseFailed {
        line: usize,
        column: usize,
        detail: String,
    },
}

impl ParserError {
    /// `true` for failures caused by the file itself being unreadable.
    #[must_use]
    pub const fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputUnavailable { .. })
    }

    /// `true` for failures caused by malformed source text.
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailed { .. })
    }
}

//! ast-grep wrapper: the Kotlin syntax tree provider.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;

/// The concrete AST tree type returned by providers.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Longest error snippet quoted in a `ParseFailed` message.
const SNIPPET_CHARS: usize = 40;

/// Turns source text into a syntax tree.
///
/// Providers are stateless; the extractor only ever reads what they return.
pub trait SyntaxTreeProvider {
    /// # Errors
    /// Returns `ParserError::ParseFailed` if no usable tree can be produced.
    fn parse(&self, source: &str) -> Result<AstTree, ParserError>;
}

/// tree-sitter Kotlin grammar via ast-grep.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTreeProvider {
    lenient: bool,
}

impl KotlinTreeProvider {
    /// A provider that rejects trees containing syntax errors.
    #[must_use]
    pub const fn new() -> Self {
        Self { lenient: false }
    }

    /// Accept trees with `ERROR` or missing-token nodes instead of failing.
    #[must_use]
    pub const fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

impl SyntaxTreeProvider for KotlinTreeProvider {
    fn parse(&self, source: &str) -> Result<AstTree, ParserError> {
        let tree = SupportLang::Kotlin.ast_grep(source);

        if let Some((line, column, detail)) = first_error(&tree.root()) {
            if !self.lenient {
                return Err(ParserError::ParseFailed {
                    line,
                    column,
                    detail,
                });
            }
            tracing::warn!(line, column, "syntax error in source; continuing leniently");
        }

        Ok(tree)
    }
}

/// Whether a path looks like a Kotlin source or script file.
#[must_use]
pub fn detect_kotlin(file_path: &str) -> bool {
    let Some((_, ext)) = file_path.rsplit_once('.') else {
        return false;
    };
    matches!(ext, "kt" | "kts")
}

/// 1-based line/column and a description of the first syntax error.
///
/// tree-sitter recovers either by wrapping unexpected text in an `ERROR` node
/// or by inserting a zero-width MISSING token; both count.
fn first_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(usize, usize, String)> {
    let detail = if node.is_missing() {
        Some(format!("missing `{}`", node.kind()))
    } else if node.kind().as_ref() == "ERROR" {
        let snippet: String = node
            .text()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(SNIPPET_CHARS)
            .collect();
        Some(format!("unexpected `{snippet}`"))
    } else {
        None
    };
    if let Some(detail) = detail {
        let pos = node.start_pos();
        return Some((pos.line() + 1, pos.column(node) + 1, detail));
    }
    node.children().find_map(|child| first_error(&child))
}

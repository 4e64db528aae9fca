//! # kdecl-parser
//!
//! ast-grep-based Kotlin parsing and declaration extraction for kdecl.
//!
//! Pipeline: source text -> syntax tree ([`SyntaxTreeProvider`]) ->
//! [`DeclarationTree`] ([`DeclarationExtractor`]). Functions and classes are
//! nested under their nearest enclosing declaration; bodies are normalized to
//! single-line text by default.
//!
//! ```
//! use kdecl_parser::{ExtractOptions, KotlinTreeProvider, extract_declarations};
//!
//! let tree = extract_declarations(
//!     "fun add(x: Int, y: Int): Int { return x + y }",
//!     &KotlinTreeProvider::new(),
//!     ExtractOptions::default(),
//! )
//! .expect("valid Kotlin");
//! assert_eq!(tree.declarations[0].name(), Some("add"));
//! ```

pub mod error;
pub mod extractors;
pub mod normalize;
pub mod parser;
pub mod source;
pub mod types;

pub use error::ParserError;
pub use extractors::{DeclarationExtractor, DeclarationNode};
pub use parser::{AstTree, KotlinTreeProvider, SyntaxTreeProvider, detect_kotlin};
pub use source::load_source;
pub use types::{
    BodyStyle, Declaration, DeclarationTree, ExtractOptions, FunctionDeclaration, Layout, Member,
    Parameter, Property, TypeDeclaration, UNIT_TYPE,
};

/// Parse `source` with `provider` and extract its declarations.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the provider rejects the source.
pub fn extract_declarations<P: SyntaxTreeProvider + ?Sized>(
    source: &str,
    provider: &P,
    options: ExtractOptions,
) -> Result<DeclarationTree, ParserError> {
    let tree = provider.parse(source)?;
    Ok(DeclarationExtractor::new(options).extract(&tree))
}

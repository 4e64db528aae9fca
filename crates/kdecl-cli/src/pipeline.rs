//! Analysis pipeline: read -> trim-indent -> parse -> extract.

use std::path::Path;

use anyhow::Context;
use kdecl_parser::{DeclarationTree, KotlinTreeProvider, detect_kotlin, extract_declarations};

use crate::bootstrap::Settings;

/// Read, parse and extract one file.
pub fn analyze(path: &Path, settings: &Settings) -> anyhow::Result<DeclarationTree> {
    if !detect_kotlin(&path.to_string_lossy()) {
        tracing::warn!(path = %path.display(), "input does not have a .kt/.kts extension");
    }

    let source = kdecl_parser::load_source(path)?;
    let provider = KotlinTreeProvider::new().lenient(settings.lenient);
    let tree = extract_declarations(&source, &provider, settings.options)
        .with_context(|| format!("invalid Kotlin source in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        roots = tree.declarations.len(),
        "analysis complete"
    );
    Ok(tree)
}

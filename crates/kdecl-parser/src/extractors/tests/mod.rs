use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
pub(super) use crate::types::{BodyStyle, Member};

mod nesting;

fn extract_with(source: &str, options: ExtractOptions) -> Vec<Declaration> {
    let root = SupportLang::Kotlin.ast_grep(source);
    DeclarationExtractor::new(options).extract(&root).declarations
}

fn parse_and_extract(source: &str) -> Vec<Declaration> {
    extract_with(source, ExtractOptions::default())
}

fn find_by_name<'a>(items: &'a [Declaration], name: &str) -> &'a Declaration {
    items
        .iter()
        .find(|item| item.name() == Some(name))
        .unwrap_or_else(|| panic!("should find declaration named '{name}'"))
}

fn names(items: &[Declaration]) -> Vec<Option<&str>> {
    items.iter().map(Declaration::name).collect()
}

fn function(item: &Declaration) -> &FunctionDeclaration {
    item.as_function()
        .unwrap_or_else(|| panic!("expected a function, got {item:?}"))
}

fn class(item: &Declaration) -> &TypeDeclaration {
    item.as_class()
        .unwrap_or_else(|| panic!("expected a class, got {item:?}"))
}

fn fixture_items() -> Vec<Declaration> {
    let source = include_str!("../../../tests/fixtures/sample.kt");
    parse_and_extract(source)
}

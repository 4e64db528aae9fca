//! Declaration extraction: syntax tree -> declaration tree.
//!
//! The walk is a single pre-order traversal. When it reaches a function or
//! class node it builds that declaration and stops; the builder walks the
//! declaration's own subtree for nested declarations. Every declaration is
//! therefore claimed exactly once, by its nearest enclosing declaration (or
//! by the file when there is none).

mod helpers;
mod members;

use ast_grep_core::{AstGrep, Node};

use crate::normalize;
use crate::types::{
    Declaration, DeclarationTree, ExtractOptions, FunctionDeclaration, Layout, TypeDeclaration,
    UNIT_TYPE,
};

use helpers::{child_text, type_after_colon};

/// Children that end a function signature's return type.
const RETURN_TYPE_STOP_KINDS: &[&str] = &["type_constraints", "function_body", "="];

/// Closed classification of syntax nodes for the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationNode {
    /// `function_declaration` or `anonymous_function`.
    Function,
    /// `class_declaration` (classes, interfaces, enum and data classes).
    Class,
    Other,
}

impl DeclarationNode {
    #[must_use]
    pub fn classify<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        match node.kind().as_ref() {
            "function_declaration" | "anonymous_function" => Self::Function,
            "class_declaration" => Self::Class,
            _ => Self::Other,
        }
    }
}

/// Builds declaration trees from parsed Kotlin source.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationExtractor {
    options: ExtractOptions,
}

impl DeclarationExtractor {
    #[must_use]
    pub const fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract the whole file according to the configured layout.
    pub fn extract<D: ast_grep_core::Doc>(&self, tree: &AstGrep<D>) -> DeclarationTree {
        let root = tree.root();
        let declarations = match self.options.layout {
            Layout::Nested => self.extract_roots(&root),
            Layout::Flat => self.extract_flat(&root),
        };
        let result = DeclarationTree { declarations };
        tracing::debug!(
            roots = result.declarations.len(),
            total = result.total_count(),
            layout = ?self.options.layout,
            "extracted declarations"
        );
        result
    }

    /// Declarations whose nearest enclosing declaration is `root`, in source
    /// order, each carrying its own nested declarations.
    pub fn extract_roots<D: ast_grep_core::Doc>(&self, root: &Node<D>) -> Vec<Declaration> {
        let mut out = Vec::new();
        for child in root.children() {
            self.collect_nested(&child, &mut out);
        }
        out
    }

    /// Every declaration under `root` in source order, without nesting.
    pub fn extract_flat<D: ast_grep_core::Doc>(&self, root: &Node<D>) -> Vec<Declaration> {
        let mut out = Vec::new();
        for child in root.children() {
            self.collect_flat(&child, &mut out);
        }
        out
    }

    /// Build the declaration rooted at `node`, or `None` if `node` is not a
    /// function or class.
    pub fn build_declaration<D: ast_grep_core::Doc>(&self, node: &Node<D>) -> Option<Declaration> {
        match DeclarationNode::classify(node) {
            DeclarationNode::Function => Some(self.function(node, self.extract_roots(node))),
            DeclarationNode::Class => Some(self.class(node, self.extract_roots(node))),
            DeclarationNode::Other => None,
        }
    }

    fn collect_nested<D: ast_grep_core::Doc>(&self, node: &Node<D>, out: &mut Vec<Declaration>) {
        match self.build_declaration(node) {
            Some(declaration) => out.push(declaration),
            None => {
                for child in node.children() {
                    self.collect_nested(&child, out);
                }
            }
        }
    }

    fn collect_flat<D: ast_grep_core::Doc>(&self, node: &Node<D>, out: &mut Vec<Declaration>) {
        match DeclarationNode::classify(node) {
            DeclarationNode::Function => out.push(self.function(node, Vec::new())),
            DeclarationNode::Class => out.push(self.class(node, Vec::new())),
            DeclarationNode::Other => {}
        }
        for child in node.children() {
            self.collect_flat(&child, out);
        }
    }

    fn function<D: ast_grep_core::Doc>(
        &self,
        node: &Node<D>,
        declarations: Vec<Declaration>,
    ) -> Declaration {
        let name = child_text(node, "simple_identifier");
        tracing::trace!(name = name.as_deref().unwrap_or("<anonymous>"), "function");
        Declaration::Function(FunctionDeclaration {
            name,
            parameters: members::function_parameters(node),
            return_type: type_after_colon(node, RETURN_TYPE_STOP_KINDS)
                .unwrap_or_else(|| UNIT_TYPE.to_string()),
            body: normalize::function_body(&node.text(), self.options.body_style),
            declarations,
        })
    }

    fn class<D: ast_grep_core::Doc>(
        &self,
        node: &Node<D>,
        declarations: Vec<Declaration>,
    ) -> Declaration {
        let name =
            child_text(node, "type_identifier").or_else(|| child_text(node, "simple_identifier"));
        tracing::trace!(name = name.as_deref().unwrap_or("<anonymous>"), "class");
        Declaration::Class(TypeDeclaration {
            name,
            properties: members::class_properties(node),
            body: normalize::class_body(&node.text(), self.options.body_style),
            declarations,
        })
    }
}

#[cfg(test)]
mod tests;

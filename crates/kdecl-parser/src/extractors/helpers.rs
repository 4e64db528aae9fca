//! Node navigation helpers shared by the declaration builders.

use ast_grep_core::Node;

const COMMENT_KINDS: &[&str] = &["line_comment", "multiline_comment"];

pub(super) fn child_of_kind<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    kind: &str,
) -> Option<Node<'r, D>> {
    node.children().find(|child| child.kind().as_ref() == kind)
}

pub(super) fn child_text<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str) -> Option<String> {
    child_of_kind(node, kind).map(|child| child.text().to_string())
}

/// Source text of the type annotation following the first direct `:` child,
/// up to (not including) the first child whose kind is in `stop_kinds`.
///
/// Covers type modifiers and annotations (`suspend () -> Unit`, `@Ann Int`)
/// and keeps the original spacing. `None` when there is no `:`.
pub(super) fn type_after_colon<D: ast_grep_core::Doc>(
    node: &Node<D>,
    stop_kinds: &[&str],
) -> Option<String> {
    let mut children = node.children().skip_while(|child| child.kind().as_ref() != ":");
    children.next()?;

    let parts: Vec<_> = children
        .take_while(|child| !stop_kinds.contains(&child.kind().as_ref()))
        .filter(|child| !COMMENT_KINDS.contains(&child.kind().as_ref()))
        .collect();
    let (first, last) = (parts.first()?, parts.last()?);

    let base = node.range().start;
    let text = node.text();
    text.get(first.range().start - base..last.range().end - base)
        .map(|slice| slice.trim().to_string())
        .filter(|slice| !slice.is_empty())
}

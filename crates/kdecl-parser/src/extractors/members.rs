//! Parameter and property extraction.

use ast_grep_core::Node;

use crate::types::{Member, Parameter, Property};

use super::helpers::{child_of_kind, child_text, type_after_colon};

const PARAMETER_KINDS: &[&str] = &["parameter", "parameter_with_optional_type"];
const CLASS_BODY_KINDS: &[&str] = &["class_body", "enum_class_body"];

/// Value parameters of a function or anonymous function, in order.
///
/// A missing parameter list yields an empty vector.
pub(super) fn function_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Parameter> {
    let Some(parameters) = child_of_kind(node, "function_value_parameters") else {
        return Vec::new();
    };

    parameters
        .children()
        .filter(|child| PARAMETER_KINDS.contains(&child.kind().as_ref()))
        .map(|parameter| Member {
            name: child_text(&parameter, "simple_identifier"),
            type_name: type_after_colon(&parameter, &[]),
        })
        .collect()
}

/// Primary-constructor value parameters followed by body-declared properties.
///
/// Constructor parameters count whether or not they carry `val`/`var`, and
/// are not de-duplicated against body properties of the same name.
pub(super) fn class_properties<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Property> {
    let mut properties = child_of_kind(node, "primary_constructor")
        .map(|constructor| constructor_parameters(&constructor))
        .unwrap_or_default();
    properties.extend(body_properties(node));
    properties
}

fn constructor_parameters<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Property> {
    let mut out = Vec::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "class_parameter" => out.push(Member {
                name: child_text(&child, "simple_identifier"),
                type_name: type_after_colon(&child, &["="]),
            }),
            // Some grammar revisions wrap the list in a named node.
            "class_parameters" => out.extend(constructor_parameters(&child)),
            _ => {}
        }
    }
    out
}

/// Properties declared directly in the class body; members of nested
/// classes and objects belong to those declarations.
fn body_properties<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Property> {
    node.children()
        .filter(|child| CLASS_BODY_KINDS.contains(&child.kind().as_ref()))
        .flat_map(|body| {
            body.children()
                .filter(|member| member.kind().as_ref() == "property_declaration")
                .filter_map(|property| {
                    // Destructuring declarations have no single variable.
                    let variable = child_of_kind(&property, "variable_declaration")?;
                    Some(Member {
                        name: child_text(&variable, "simple_identifier"),
                        type_name: type_after_colon(&variable, &[]),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

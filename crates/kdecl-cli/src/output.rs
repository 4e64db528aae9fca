use serde::Serialize;

/// Render a serializable response as compact (single-line) or pretty JSON.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Print a serializable response to stdout.
pub fn output<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = render(value, pretty)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use kdecl_parser::{Declaration, DeclarationTree, FunctionDeclaration, UNIT_TYPE};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_tree() -> DeclarationTree {
        DeclarationTree {
            declarations: vec![Declaration::Function(FunctionDeclaration {
                name: Some("check".to_string()),
                parameters: Vec::new(),
                return_type: UNIT_TYPE.to_string(),
                body: "fun check() { require(a <= b && c != d) }".to_string(),
                declarations: Vec::new(),
            })],
        }
    }

    #[test]
    fn compact_render_is_one_line() {
        let rendered = render(&sample_tree(), false).expect("render");
        assert_eq!(
            rendered,
            r#"{"declarations":[{"type":"function","name":"check","parameters":[],"returnType":"Unit","body":"fun check() { require(a <= b && c != d) }"}]}"#
        );
    }

    #[test]
    fn pretty_render_is_indented() {
        let rendered = render(&sample_tree(), true).expect("render");
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("  \"declarations\": ["));
    }

    #[test]
    fn empty_tree_renders_empty_sequence() {
        let rendered = render(&DeclarationTree::default(), false).expect("render");
        assert_eq!(rendered, r#"{"declarations":[]}"#);
    }
}

use pretty_assertions::assert_eq;

use super::*;
use crate::types::Layout;

// ── Root filtering ─────────────────────────────────────────────

#[test]
fn fixture_roots_in_source_order() {
    let items = fixture_items();
    assert_eq!(
        names(&items),
        vec![
            Some("Point"),
            Some("User"),
            Some("Shape"),
            Some("distance"),
            Some("log"),
        ]
    );
}

#[test]
fn local_function_appears_only_under_its_parent() {
    let items = parse_and_extract("fun f() {\n    fun g() {}\n    g()\n}\n");

    assert_eq!(names(&items), vec![Some("f")]);
    let f = function(&items[0]);
    assert_eq!(names(&f.declarations), vec![Some("g")]);
    assert!(function(&f.declarations[0]).declarations.is_empty());
}

#[test]
fn empty_file_yields_no_declarations() {
    assert!(parse_and_extract("").is_empty());
    assert!(parse_and_extract("package demo\n\nval x = 1\n").is_empty());
}

// ── Nearest-ancestor nesting ───────────────────────────────────

#[test]
fn class_members_nest_under_class() {
    let items = fixture_items();
    let user = class(find_by_name(&items, "User"));
    assert_eq!(
        names(&user.declarations),
        vec![Some("display"), Some("Settings")]
    );

    let display = function(find_by_name(&user.declarations, "display"));
    assert_eq!(names(&display.declarations), vec![Some("decorate")]);
}

#[test]
fn deep_nesting_is_not_duplicated() {
    let source = r"
class Outer {
    fun method() {
        fun local() {
            class Deep {
                fun innermost() {}
            }
        }
    }
}
";
    let items = parse_and_extract(source);
    assert_eq!(names(&items), vec![Some("Outer")]);

    let outer = class(&items[0]);
    assert_eq!(names(&outer.declarations), vec![Some("method")]);

    let method = function(&outer.declarations[0]);
    assert_eq!(names(&method.declarations), vec![Some("local")]);

    let local = function(&method.declarations[0]);
    assert_eq!(names(&local.declarations), vec![Some("Deep")]);

    let deep = class(&local.declarations[0]);
    assert_eq!(names(&deep.declarations), vec![Some("innermost")]);

    let total = DeclarationTree {
        declarations: items.clone(),
    }
    .total_count();
    assert_eq!(total, 5);
}

#[test]
fn companion_object_functions_nest_under_enclosing_class() {
    let source = r"
class Registry {
    companion object {
        fun create(): Registry = Registry()
    }
}
";
    let items = parse_and_extract(source);
    assert_eq!(names(&items), vec![Some("Registry")]);
    let registry = class(&items[0]);
    assert_eq!(names(&registry.declarations), vec![Some("create")]);
    assert_eq!(function(&registry.declarations[0]).return_type, "Registry");
}

#[test]
fn top_level_anonymous_function_is_kept_without_name() {
    let items = parse_and_extract("val greet = fun() { println(\"hi\") }\n");

    assert_eq!(items.len(), 1);
    let greet = function(&items[0]);
    assert_eq!(greet.name, None);
    assert_eq!(greet.return_type, "Unit");
    assert!(greet.body.starts_with("fun()"), "body: {:?}", greet.body);
}

#[test]
fn declaration_inside_lambda_belongs_to_enclosing_function() {
    let source = r"
fun outer() {
    run {
        fun inLambda() {}
    }
}
";
    let items = parse_and_extract(source);
    assert_eq!(names(&items), vec![Some("outer")]);
    assert_eq!(
        names(&function(&items[0]).declarations),
        vec![Some("inLambda")]
    );
}

// ── build_declaration ──────────────────────────────────────────

#[test]
fn build_declaration_ignores_other_nodes() {
    let root = SupportLang::Kotlin.ast_grep("val x = 1\n");
    let extractor = DeclarationExtractor::default();
    assert_eq!(extractor.build_declaration(&root.root()), None);
    assert_eq!(
        DeclarationNode::classify(&root.root()),
        DeclarationNode::Other
    );
}

// ── Flat layout ────────────────────────────────────────────────

#[test]
fn flat_layout_lists_every_declaration_in_source_order() {
    let options = ExtractOptions {
        layout: Layout::Flat,
        ..ExtractOptions::default()
    };
    let items = extract_with(include_str!("../../../tests/fixtures/sample.kt"), options);

    assert_eq!(
        names(&items),
        vec![
            Some("Point"),
            Some("User"),
            Some("display"),
            Some("decorate"),
            Some("Settings"),
            Some("Shape"),
            Some("area"),
            Some("distance"),
            Some("log"),
        ]
    );
    assert!(items.iter().all(|item| item.nested().is_empty()));
}

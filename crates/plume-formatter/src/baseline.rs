//! Baseline ESTree renderer
//!
//! Covers the statement and expression shapes found around imports. Anything
//! else is echoed from its `raw` source text when the parser supplied one.

use crate::delegate::DelegateRenderer;
use crate::rule::PrintFn;
use crate::rules::quoted;
use crate::specifiers::specifier_document;
use plume_core::ast::{AstNode, ImportDeclaration, Specifier, SpecifierKind, SyntaxNode};
use plume_core::config::RenderConfig;
use plume_core::doc::{Document, empty, hard_line, join, sequence, space, text, token};
use serde_json::Value;
use tracing::trace;

/// Renders ESTree nodes without any plugin behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct EstreeRenderer;

impl EstreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DelegateRenderer for EstreeRenderer {
    fn render(&self, node: &SyntaxNode, _config: &RenderConfig, print: &PrintFn<'_>) -> Document {
        match node.kind() {
            "Program" => join(hard_line(), node.children("body").iter().map(print)),
            "ImportDeclaration" => match ImportDeclaration::cast(node) {
                Some(import) => import_declaration(&import, print),
                None => empty(),
            },
            "ImportSpecifier" | "ImportDefaultSpecifier" | "ImportNamespaceSpecifier" => {
                Specifier::cast(node)
                    .map(|spec| specifier_document(&spec))
                    .unwrap_or_else(empty)
            }
            "Literal" | "StringLiteral" | "NumericLiteral" => literal(node),
            "Identifier" => text(node.str_field("name").unwrap_or_default()),
            "VariableDeclaration" => sequence(vec![
                text(node.str_field("kind").unwrap_or("var")),
                space(),
                join(token(", "), node.children("declarations").iter().map(print)),
                token(";"),
            ]),
            "VariableDeclarator" => {
                let mut parts = vec![node.child("id").map(print).unwrap_or_else(empty)];
                if let Some(init) = node.child("init") {
                    parts.extend([token(" = "), print(init)]);
                }
                sequence(parts)
            }
            "ExpressionStatement" => match node.child("expression") {
                Some(expression) => sequence(vec![print(expression), token(";")]),
                None => raw(node),
            },
            kind => {
                trace!("No baseline printer for {}, echoing raw text", kind);
                raw(node)
            }
        }
    }
}

/// Single-line import in source order: `import a, { b, c } from "m";`
///
/// A declaration without specifiers is a side-effect import: `import "m";`
fn import_declaration(import: &ImportDeclaration<'_>, print: &PrintFn<'_>) -> Document {
    let source = import
        .syntax()
        .child("source")
        .map(print)
        .unwrap_or_else(|| quoted(""));

    let specs: Vec<Specifier<'_>> = import
        .specifiers()
        .iter()
        .filter_map(Specifier::cast)
        .collect();
    if specs.is_empty() {
        return sequence(vec![token("import"), space(), source, token(";")]);
    }

    let (named, leading): (Vec<&Specifier<'_>>, Vec<&Specifier<'_>>) = specs
        .iter()
        .partition(|spec| spec.kind == SpecifierKind::Named);

    let mut clauses: Vec<Document> = leading.iter().map(|spec| print(spec.syntax())).collect();
    if !named.is_empty() {
        clauses.push(sequence(vec![
            token("{ "),
            join(token(", "), named.iter().map(|spec| print(spec.syntax()))),
            token(" }"),
        ]));
    }

    sequence(vec![
        token("import"),
        space(),
        join(token(", "), clauses),
        space(),
        token("from"),
        space(),
        source,
        token(";"),
    ])
}

fn literal(node: &SyntaxNode) -> Document {
    match node.value("value") {
        Some(Value::String(value)) => quoted(value),
        Some(value) => match node.str_field("raw") {
            Some(raw) => text(raw),
            None => text(&value.to_string()),
        },
        None => raw(node),
    }
}

fn raw(node: &SyntaxNode) -> Document {
    node.str_field("raw").map(text).unwrap_or_else(empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Renders a tree using only the baseline, recursing into itself
    fn render(value: serde_json::Value) -> String {
        fn print(node: &SyntaxNode) -> Document {
            EstreeRenderer.render(node, &RenderConfig::default(), &print)
        }
        print(&SyntaxNode::from_value(value).unwrap()).to_string()
    }

    fn ident(name: &str) -> serde_json::Value {
        json!({ "type": "Identifier", "name": name })
    }

    #[test]
    fn test_import_in_node_order() {
        let output = render(json!({
            "type": "ImportDeclaration",
            "specifiers": [
                { "type": "ImportDefaultSpecifier", "local": ident("React") },
                { "type": "ImportSpecifier", "imported": ident("b"), "local": ident("b") },
                { "type": "ImportSpecifier", "imported": ident("a"), "local": ident("a") }
            ],
            "source": { "type": "Literal", "value": "react", "raw": "'react'" }
        }));
        assert_eq!(output, "import React, { b, a } from \"react\";");
    }

    #[test]
    fn test_leading_specifiers_precede_named_block() {
        let output = render(json!({
            "type": "ImportDeclaration",
            "specifiers": [
                { "type": "ImportSpecifier", "imported": ident("a"), "local": ident("a") },
                { "type": "ImportNamespaceSpecifier", "local": ident("NS") },
                { "type": "ImportDefaultSpecifier", "local": ident("D") }
            ],
            "source": { "type": "Literal", "value": "m" }
        }));
        assert_eq!(output, "import * as NS, D, { a } from \"m\";");
    }

    #[test]
    fn test_side_effect_import() {
        let output = render(json!({
            "type": "ImportDeclaration",
            "specifiers": [],
            "source": { "type": "StringLiteral", "value": "./polyfill" }
        }));
        assert_eq!(output, "import \"./polyfill\";");
    }

    #[test]
    fn test_variable_declaration() {
        let output = render(json!({
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [
                {
                    "type": "VariableDeclarator",
                    "id": ident("x"),
                    "init": { "type": "NumericLiteral", "value": 1, "extra": { "raw": "1" } }
                },
                { "type": "VariableDeclarator", "id": ident("y"), "init": null }
            ]
        }));
        assert_eq!(output, "let x = 1, y;");
    }

    #[test]
    fn test_unknown_node_uses_raw() {
        assert_eq!(
            render(json!({ "type": "ClassDeclaration", "raw": "class A {}" })),
            "class A {}"
        );
        assert_eq!(render(json!({ "type": "ClassDeclaration" })), "");
    }

    #[test]
    fn test_numeric_literal_prefers_raw() {
        assert_eq!(
            render(json!({ "type": "Literal", "value": 255, "raw": "0xff" })),
            "0xff"
        );
    }
}

//! Syntax tree model
//!
//! Trees arrive as ESTree-shaped JSON from an external parser. A [`SyntaxNode`]
//! keeps the node's `type` as its kind and every other property as an ordered
//! field. Nothing here interprets the tree beyond what rendering needs; the
//! typed views ([`ImportDeclaration`], [`Specifier`]) are thin borrowed
//! wrappers obtained through [`AstNode::cast`].
//!
//! # Example
//!
//! ```
//! use plume_core::ast::{AstNode, ImportDeclaration, SyntaxNode};
//!
//! let node = SyntaxNode::from_json_str(
//!     r#"{ "type": "ImportDeclaration", "specifiers": [], "source": { "type": "Literal", "value": "z" } }"#,
//! ).unwrap();
//! let import = ImportDeclaration::cast(&node).unwrap();
//!
//! assert_eq!(import.source(), Some("z"));
//! assert!(import.specifiers().is_empty());
//! ```

use crate::error::{PlumeError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped syntax node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(flatten)]
    pub fields: IndexMap<String, Field>,
}

/// A node property: a child node, a list of child nodes, or plain data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Node(Box<SyntaxNode>),
    List(Vec<SyntaxNode>),
    Value(Value),
}

impl From<SyntaxNode> for Field {
    fn from(node: SyntaxNode) -> Self {
        Field::Node(Box::new(node))
    }
}

impl From<Vec<SyntaxNode>> for Field {
    fn from(nodes: Vec<SyntaxNode>) -> Self {
        Field::List(nodes)
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Value(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Value(Value::from(value))
    }
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Field>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Decode a tree from ESTree JSON text
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| PlumeError::parse_error(e.to_string()))
    }

    /// Decode a tree from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| PlumeError::parse_error(e.to_string()))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Single child node stored under `name`
    pub fn child(&self, name: &str) -> Option<&SyntaxNode> {
        match self.fields.get(name) {
            Some(Field::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Child list stored under `name`; empty when missing or not a list
    pub fn children(&self, name: &str) -> &[SyntaxNode] {
        match self.fields.get(name) {
            Some(Field::List(nodes)) => nodes,
            _ => &[],
        }
    }

    /// Plain value stored under `name`
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(Field::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// String value stored under `name`
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    /// The name this node spells: `Identifier.name`, or a string literal's value
    pub fn name(&self) -> Option<&str> {
        self.str_field("name").or_else(|| self.str_field("value"))
    }
}

/// Typed view over a [`SyntaxNode`]
pub trait AstNode<'a>: Sized {
    fn can_cast(kind: &str) -> bool;
    fn cast(node: &'a SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &'a SyntaxNode;
}

/// `import ... from "source";`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportDeclaration<'a> {
    syntax: &'a SyntaxNode,
}

impl<'a> AstNode<'a> for ImportDeclaration<'a> {
    fn can_cast(kind: &str) -> bool {
        kind == "ImportDeclaration"
    }

    fn cast(node: &'a SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then_some(Self { syntax: node })
    }

    fn syntax(&self) -> &'a SyntaxNode {
        self.syntax
    }
}

impl<'a> ImportDeclaration<'a> {
    /// Specifier nodes in declaration order
    pub fn specifiers(&self) -> &'a [SyntaxNode] {
        self.syntax.children("specifiers")
    }

    /// Module path string
    pub fn source(&self) -> Option<&'a str> {
        self.syntax.child("source").and_then(|s| s.str_field("value"))
    }

    /// Copy of the declaration with its specifier list replaced
    pub fn with_specifiers(&self, specifiers: Vec<SyntaxNode>) -> SyntaxNode {
        self.syntax
            .clone()
            .with_field("specifiers", specifiers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `import local from ...`
    Default,
    /// `import * as local from ...`
    Namespace,
    /// `import { imported as local } from ...`
    Named,
}

impl SpecifierKind {
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "ImportDefaultSpecifier" => Some(Self::Default),
            "ImportNamespaceSpecifier" => Some(Self::Namespace),
            "ImportSpecifier" => Some(Self::Named),
            _ => None,
        }
    }
}

/// One entry of an import declaration's specifier list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specifier<'a> {
    pub kind: SpecifierKind,
    pub local: &'a str,
    /// Exported name for named specifiers
    pub imported: Option<&'a str>,
    syntax: &'a SyntaxNode,
}

impl<'a> AstNode<'a> for Specifier<'a> {
    fn can_cast(kind: &str) -> bool {
        SpecifierKind::from_node_kind(kind).is_some()
    }

    fn cast(node: &'a SyntaxNode) -> Option<Self> {
        let kind = SpecifierKind::from_node_kind(node.kind())?;
        let imported = match kind {
            SpecifierKind::Named => node.child("imported").and_then(SyntaxNode::name),
            _ => None,
        };
        let local = node
            .child("local")
            .and_then(SyntaxNode::name)
            .or(imported)
            .unwrap_or_default();

        Some(Self {
            kind,
            local,
            imported,
            syntax: node,
        })
    }

    fn syntax(&self) -> &'a SyntaxNode {
        self.syntax
    }
}

impl<'a> Specifier<'a> {
    /// Name used for ordering: the imported name when present, else the local
    pub fn sort_key(&self) -> &'a str {
        self.imported.unwrap_or(self.local)
    }

    /// Whether the specifier renames its import (`imported as local`)
    pub fn is_aliased(&self) -> bool {
        self.imported.is_some_and(|imported| imported != self.local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn import_node() -> SyntaxNode {
        SyntaxNode::from_value(json!({
            "type": "ImportDeclaration",
            "specifiers": [
                { "type": "ImportDefaultSpecifier", "local": { "type": "Identifier", "name": "React" } },
                {
                    "type": "ImportSpecifier",
                    "imported": { "type": "Identifier", "name": "useState" },
                    "local": { "type": "Identifier", "name": "useLocal" }
                }
            ],
            "source": { "type": "Literal", "value": "react", "raw": "'react'" },
            "importKind": "value"
        }))
        .unwrap()
    }

    #[test]
    fn test_fields_decode_by_shape() {
        let node = import_node();
        assert_eq!(node.kind(), "ImportDeclaration");
        assert!(matches!(node.field("specifiers"), Some(Field::List(_))));
        assert!(matches!(node.field("source"), Some(Field::Node(_))));
        assert_eq!(node.str_field("importKind"), Some("value"));
    }

    #[test]
    fn test_field_order_preserved() {
        let node = import_node();
        let names: Vec<&str> = node.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["specifiers", "source", "importKind"]);
    }

    #[test]
    fn test_non_node_arrays_stay_values() {
        let node = SyntaxNode::from_value(json!({
            "type": "ArrayExpression",
            "elements": [null, 1],
            "range": [0, 10]
        }))
        .unwrap();
        assert!(node.children("elements").is_empty());
        assert!(matches!(node.field("range"), Some(Field::Value(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SyntaxNode::from_json_str("{ \"type\": ").unwrap_err();
        assert!(matches!(err, PlumeError::Parse { .. }));

        let err = SyntaxNode::from_json_str("{ \"specifiers\": [] }").unwrap_err();
        assert!(matches!(err, PlumeError::Parse { .. }));
    }

    #[test]
    fn test_import_declaration_view() {
        let node = import_node();
        let import = ImportDeclaration::cast(&node).unwrap();
        assert_eq!(import.source(), Some("react"));
        assert_eq!(import.specifiers().len(), 2);
        assert!(ImportDeclaration::cast(&SyntaxNode::new("Program")).is_none());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let node = SyntaxNode::new("ImportDeclaration");
        let import = ImportDeclaration::cast(&node).unwrap();
        assert!(import.specifiers().is_empty());
        assert_eq!(import.source(), None);
    }

    #[test]
    fn test_specifier_views() {
        let node = import_node();
        let specs: Vec<Specifier> = node
            .children("specifiers")
            .iter()
            .filter_map(Specifier::cast)
            .collect();

        assert_eq!(specs[0].kind, SpecifierKind::Default);
        assert_eq!(specs[0].local, "React");
        assert_eq!(specs[0].imported, None);

        assert_eq!(specs[1].kind, SpecifierKind::Named);
        assert_eq!(specs[1].sort_key(), "useState");
        assert!(specs[1].is_aliased());
    }

    #[test]
    fn test_string_literal_imported_name() {
        let node = SyntaxNode::from_value(json!({
            "type": "ImportSpecifier",
            "imported": { "type": "Literal", "value": "a-b" },
            "local": { "type": "Identifier", "name": "ab" }
        }))
        .unwrap();
        let spec = Specifier::cast(&node).unwrap();
        assert_eq!(spec.imported, Some("a-b"));
        assert_eq!(spec.local, "ab");
    }

    #[test]
    fn test_with_specifiers_copies() {
        let node = import_node();
        let import = ImportDeclaration::cast(&node).unwrap();
        let copy = import.with_specifiers(vec![]);

        assert!(copy.children("specifiers").is_empty());
        assert_eq!(node.children("specifiers").len(), 2);
        assert_eq!(copy.fields.keys().next().map(String::as_str), Some("specifiers"));
    }
}

//! Built-in rendering rules
//!
//! `ImportDeclaration` carries the layout logic; the remaining rules are small
//! structural renderers that keep program and import output consistent.

mod import_declaration;
mod literal;
mod program;
mod specifier;
mod variable_declaration;

pub use import_declaration::ImportDeclarationRule;
pub use literal::LiteralRule;
pub use program::ProgramRule;
pub use specifier::SpecifierRule;
pub use variable_declaration::VariableDeclarationRule;

use crate::rule::RenderRule;
use plume_core::ast::SpecifierKind;
use plume_core::doc::{Document, sequence, text, token};

/// Every built-in rule, in registration order
pub fn builtin_rules() -> Vec<Box<dyn RenderRule>> {
    vec![
        Box::new(ProgramRule),
        Box::new(ImportDeclarationRule),
        Box::new(SpecifierRule::new(SpecifierKind::Named)),
        Box::new(SpecifierRule::new(SpecifierKind::Default)),
        Box::new(SpecifierRule::new(SpecifierKind::Namespace)),
        Box::new(LiteralRule),
        Box::new(VariableDeclarationRule),
    ]
}

/// `value` wrapped in double quotes
pub(crate) fn quoted(value: &str) -> Document {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    sequence(vec![token("\""), text(&escaped), token("\"")])
}

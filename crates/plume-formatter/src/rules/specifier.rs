//! Default, namespace and named import specifiers

use crate::rule::{PrintFn, RenderOutcome, RenderRule};
use crate::specifiers::specifier_document;
use plume_core::ast::{AstNode, Specifier, SpecifierKind, SyntaxNode};
use plume_core::config::{MULTILINE_IMPORTS, RenderConfig};

/// Renders one kind of import specifier: `local`, `* as local` or
/// `imported as local`
pub struct SpecifierRule {
    kind: SpecifierKind,
}

impl SpecifierRule {
    pub fn new(kind: SpecifierKind) -> Self {
        Self { kind }
    }
}

impl RenderRule for SpecifierRule {
    fn node_kind(&self) -> &str {
        match self.kind {
            SpecifierKind::Default => "ImportDefaultSpecifier",
            SpecifierKind::Namespace => "ImportNamespaceSpecifier",
            SpecifierKind::Named => "ImportSpecifier",
        }
    }

    fn option_key(&self) -> &str {
        MULTILINE_IMPORTS
    }

    fn render(&self, node: &SyntaxNode, _config: &RenderConfig, _print: &PrintFn<'_>) -> RenderOutcome {
        match Specifier::cast(node) {
            Some(spec) if spec.kind == self.kind => {
                RenderOutcome::Rendered(specifier_document(&spec))
            }
            _ => RenderOutcome::Deferred,
        }
    }
}

//! String literals printed with double quotes

use super::quoted;
use crate::rule::{PrintFn, RenderOutcome, RenderRule};
use plume_core::ast::SyntaxNode;
use plume_core::config::{MULTILINE_IMPORTS, RenderConfig};

/// Prints string literals with double quotes; other literals are left to the
/// delegate
pub struct LiteralRule;

impl RenderRule for LiteralRule {
    fn node_kind(&self) -> &str {
        "Literal"
    }

    fn option_key(&self) -> &str {
        MULTILINE_IMPORTS
    }

    fn render(&self, node: &SyntaxNode, _config: &RenderConfig, _print: &PrintFn<'_>) -> RenderOutcome {
        match node.str_field("value") {
            Some(value) => RenderOutcome::Rendered(quoted(value)),
            None => RenderOutcome::Deferred,
        }
    }
}

//! Program layout: top-level statements one per line

use crate::rule::{PrintFn, RenderOutcome, RenderRule};
use plume_core::ast::SyntaxNode;
use plume_core::config::{MULTILINE_IMPORTS, RenderConfig};
use plume_core::doc::{hard_line, join};

/// Prints top-level statements one after another, each on its own line
pub struct ProgramRule;

impl RenderRule for ProgramRule {
    fn node_kind(&self) -> &str {
        "Program"
    }

    fn option_key(&self) -> &str {
        MULTILINE_IMPORTS
    }

    fn render(&self, node: &SyntaxNode, _config: &RenderConfig, print: &PrintFn<'_>) -> RenderOutcome {
        let body = node.children("body").iter().map(print);
        RenderOutcome::Rendered(join(hard_line(), body))
    }
}

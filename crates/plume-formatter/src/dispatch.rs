//! Dispatch loop
//!
//! Every node is rendered by exactly one of its registered rule or the
//! delegate. Child positions recurse through the dispatcher, so a rule that
//! prints its children still lets their own rules apply.

use crate::delegate::DelegateRenderer;
use crate::registry::RuleRegistry;
use crate::rule::RenderOutcome;
use plume_core::Result;
use plume_core::ast::SyntaxNode;
use plume_core::config::RenderConfig;
use plume_core::doc::{Document, Printer, PrinterOptions};
use tracing::{debug, trace};

pub struct Dispatcher<'r> {
    registry: &'r RuleRegistry,
    delegate: Box<dyn DelegateRenderer>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r RuleRegistry, delegate: Box<dyn DelegateRenderer>) -> Self {
        Self { registry, delegate }
    }

    /// Build the document for `node`
    pub fn print(&self, node: &SyntaxNode, config: &RenderConfig) -> Document {
        let recurse = |child: &SyntaxNode| self.print(child, config);

        let Some(rule) = self.registry.lookup(node.kind()) else {
            log_decision(config, node.kind(), "delegate (no rule)");
            return self.delegate.render(node, config, &recurse);
        };

        match rule.render(node, config, &recurse) {
            RenderOutcome::Rendered(document) => {
                log_decision(config, node.kind(), "rule");
                document
            }
            RenderOutcome::Deferred => {
                log_decision(config, node.kind(), "delegate (deferred)");
                self.delegate.render(node, config, &recurse)
            }
            RenderOutcome::Rewritten(copy) => {
                log_decision(config, node.kind(), "delegate (rewritten)");
                self.delegate.render(&copy, config, &recurse)
            }
        }
    }

    /// Print `node` to text laid out with the configured indentation
    ///
    /// The output always ends with a newline.
    pub fn format(&self, node: &SyntaxNode, config: &RenderConfig) -> Result<String> {
        let document = self.print(node, config);
        let mut printer = Printer::new(PrinterOptions::from(&config.layout));
        let mut output = printer.print(&document)?;

        if !output.ends_with('\n') {
            output.push('\n');
        }

        debug!("Formatted {} line(s)", printer.line_number());
        Ok(output)
    }
}

fn log_decision(config: &RenderConfig, node_kind: &str, decision: &str) {
    if config.options.debug() {
        debug!(node_kind, decision, "dispatch");
    } else {
        trace!(node_kind, decision, "dispatch");
    }
}

//! Rendering rule contract
//!
//! A rule customizes how one syntax-node kind is printed. It may produce a
//! document, decline and leave the node to the delegate renderer, or decline
//! while handing the delegate a rewritten copy of the node.

use plume_core::ast::SyntaxNode;
use plume_core::config::RenderConfig;
use plume_core::doc::Document;

/// Print callback for child positions
///
/// Children printed through it go back through the dispatcher, so they can be
/// handled by their own rule or by the delegate.
pub type PrintFn<'a> = dyn Fn(&SyntaxNode) -> Document + 'a;

/// Result of asking a rule to render a node
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The rule produced the node's document
    Rendered(Document),
    /// The rule does not handle this node; the delegate renders it unchanged
    Deferred,
    /// The rule does not handle this node, but the delegate must render this
    /// copy instead of the original
    Rewritten(SyntaxNode),
}

/// Base trait for all rendering rules
///
/// Rules are registered once and then only read, so they carry no mutable
/// state of their own.
pub trait RenderRule: Send + Sync {
    /// Node kind this rule renders (e.g. `ImportDeclaration`)
    fn node_kind(&self) -> &str;

    /// Configuration key that activates this rule during validation
    fn option_key(&self) -> &str;

    /// Additional keys this rule understands
    ///
    /// Returns an empty vector by default.
    fn valid_option_keys(&self) -> Vec<&str> {
        vec![]
    }

    /// Keys that must not be enabled together with this rule's option key
    ///
    /// Returns an empty vector by default.
    fn conflicting_option_keys(&self) -> Vec<&str> {
        vec![]
    }

    /// Render a node of this rule's kind
    fn render(&self, node: &SyntaxNode, config: &RenderConfig, print: &PrintFn<'_>)
    -> RenderOutcome;
}

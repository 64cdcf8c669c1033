//! Delegate renderer boundary
//!
//! The delegate renders every node no rule claims. It is injected into the
//! [`Dispatcher`](crate::Dispatcher) at construction.

use crate::rule::PrintFn;
use plume_core::ast::SyntaxNode;
use plume_core::config::RenderConfig;
use plume_core::doc::Document;

/// Baseline renderer used as the fallback for any node kind
pub trait DelegateRenderer {
    /// Render `node`; child positions should be printed through `print`
    fn render(&self, node: &SyntaxNode, config: &RenderConfig, print: &PrintFn<'_>) -> Document;
}

impl<F> DelegateRenderer for F
where
    F: Fn(&SyntaxNode, &RenderConfig, &PrintFn<'_>) -> Document,
{
    fn render(&self, node: &SyntaxNode, config: &RenderConfig, print: &PrintFn<'_>) -> Document {
        self(node, config, print)
    }
}

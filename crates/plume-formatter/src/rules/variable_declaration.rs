//! Marker comment in front of variable declarations

use crate::rule::{PrintFn, RenderOutcome, RenderRule};
use plume_core::ast::SyntaxNode;
use plume_core::config::{DEBUG, HOOK_VARIABLE_DECLARATIONS, RenderConfig};
use plume_core::doc::{join, sequence, space, text, token};
use tracing::debug;

/// Marks variable declarations with a leading `/* Hooked */` comment
///
/// Declarators still go through `print`, so their own formatting is untouched.
pub struct VariableDeclarationRule;

impl RenderRule for VariableDeclarationRule {
    fn node_kind(&self) -> &str {
        "VariableDeclaration"
    }

    fn option_key(&self) -> &str {
        HOOK_VARIABLE_DECLARATIONS
    }

    fn valid_option_keys(&self) -> Vec<&str> {
        vec![DEBUG]
    }

    fn render(&self, node: &SyntaxNode, config: &RenderConfig, print: &PrintFn<'_>) -> RenderOutcome {
        if !config.options.hook_variable_declarations() {
            return RenderOutcome::Deferred;
        }

        let declarations = node.children("declarations");
        if config.options.debug() {
            debug!("Hooking variable declaration with {} declarator(s)", declarations.len());
        }

        let keyword = node.str_field("kind").unwrap_or("var");
        RenderOutcome::Rendered(sequence(vec![
            token("/* Hooked */"),
            space(),
            text(keyword),
            space(),
            join(token(", "), declarations.iter().map(print)),
            token(";"),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::config::PluginOptions;
    use serde_json::json;

    fn declaration() -> SyntaxNode {
        SyntaxNode::from_value(json!({
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [
                { "type": "VariableDeclarator", "raw": "a = 1" },
                { "type": "VariableDeclarator", "raw": "b = 2" }
            ]
        }))
        .unwrap()
    }

    fn print_raw(node: &SyntaxNode) -> plume_core::doc::Document {
        text(node.str_field("raw").unwrap_or_default())
    }

    #[test]
    fn test_disabled_defers() {
        let outcome =
            VariableDeclarationRule.render(&declaration(), &RenderConfig::default(), &print_raw);
        assert_eq!(outcome, RenderOutcome::Deferred);
    }

    #[test]
    fn test_enabled_adds_marker() {
        let config = RenderConfig::with_options(PluginOptions {
            hook_variable_declarations: Some(true),
            ..Default::default()
        });
        let outcome = VariableDeclarationRule.render(&declaration(), &config, &print_raw);
        assert!(matches!(
            outcome,
            RenderOutcome::Rendered(doc) if doc.to_string() == "/* Hooked */ const a = 1, b = 2;"
        ));
    }
}

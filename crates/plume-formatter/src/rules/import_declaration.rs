//! Import declaration layout
//!
//! Two independent switches shape the output. `sortImports` reorders the
//! named specifiers; `multilineImports` (gated by `minItemsForMultiline`)
//! puts them one per line:
//!
//! ```text
//! import Default, {
//!     a,
//!     b,
//!   } from "module";
//! ```
//!
//! Named specifiers sit two indentation units deep and the closing brace one.
//! When multiline layout is off the rule steps aside, but a sorted order is
//! still handed on to the delegate.

use super::quoted;
use crate::rule::{PrintFn, RenderOutcome, RenderRule};
use crate::specifiers::{ClassifiedSpecifiers, classify, sort_named};
use plume_core::ast::{AstNode, ImportDeclaration, SyntaxNode};
use plume_core::config::{
    DEBUG, MIN_ITEMS_FOR_MULTILINE, MULTILINE_IMPORTS, RenderConfig, SORT_IMPORTS,
};
use plume_core::doc::{Document, group, hard_line, indent, join, sequence, space, token};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    SingleLine,
    Multiline,
}

pub struct ImportDeclarationRule;

impl RenderRule for ImportDeclarationRule {
    fn node_kind(&self) -> &str {
        "ImportDeclaration"
    }

    fn option_key(&self) -> &str {
        MULTILINE_IMPORTS
    }

    fn valid_option_keys(&self) -> Vec<&str> {
        vec![SORT_IMPORTS, MIN_ITEMS_FOR_MULTILINE, DEBUG]
    }

    fn render(&self, node: &SyntaxNode, config: &RenderConfig, print: &PrintFn<'_>) -> RenderOutcome {
        let Some(import) = ImportDeclaration::cast(node) else {
            return RenderOutcome::Deferred;
        };
        let options = &config.options;

        let mut classified = classify(import.specifiers());
        let sorted = options.sort_imports();
        if sorted {
            classified.named = sort_named(classified.named);
        }

        if !options.multiline_imports() {
            return if sorted {
                RenderOutcome::Rewritten(import.with_specifiers(classified.to_nodes()))
            } else {
                RenderOutcome::Deferred
            };
        }

        let layout = if classified.named.len() >= options.min_items_for_multiline() {
            Layout::Multiline
        } else {
            Layout::SingleLine
        };

        if options.debug() {
            debug!(
                "Import from {:?}: {} named specifier(s), {:?} layout, sorted: {}",
                import.source().unwrap_or_default(),
                classified.named.len(),
                layout,
                sorted
            );
        }

        RenderOutcome::Rendered(render_import(&import, &classified, layout, print))
    }
}

fn render_import(
    import: &ImportDeclaration<'_>,
    classified: &ClassifiedSpecifiers<'_>,
    layout: Layout,
    print: &PrintFn<'_>,
) -> Document {
    let leading: Vec<Document> = classified
        .leading()
        .map(|spec| print(spec.syntax()))
        .collect();
    let named: Vec<Document> = classified
        .named
        .iter()
        .map(|spec| print(spec.syntax()))
        .collect();

    let mut parts = vec![token("import"), space()];

    let has_leading = !leading.is_empty();
    if has_leading {
        parts.push(join(token(", "), leading));
        if !named.is_empty() {
            parts.push(token(", "));
        }
    }

    if !named.is_empty() {
        parts.push(match layout {
            Layout::SingleLine => single_line_block(named),
            Layout::Multiline => multiline_block(named),
        });
    } else if !has_leading {
        parts.push(token("{}"));
    }

    parts.extend([
        space(),
        token("from"),
        space(),
        quoted(import.source().unwrap_or_default()),
        token(";"),
    ]);

    sequence(parts)
}

/// `{ a, b }`
fn single_line_block(named: Vec<Document>) -> Document {
    sequence(vec![token("{ "), join(token(", "), named), token(" }")])
}

/// Opening brace, each specifier on its own line with a trailing comma, then
/// the closing brace on its own line
fn multiline_block(named: Vec<Document>) -> Document {
    let lines = named
        .into_iter()
        .map(|spec| sequence(vec![hard_line(), spec, token(",")]))
        .collect();

    group(vec![
        token("{"),
        indent(vec![indent(lines)]),
        indent(vec![hard_line(), token("}")]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifiers::specifier_document;
    use plume_core::ast::Specifier;
    use plume_core::config::PluginOptions;
    use plume_core::doc::{Printer, PrinterOptions, empty};
    use serde_json::json;

    fn import(default: Option<&str>, named: &[&str], source: &str) -> SyntaxNode {
        let mut specifiers: Vec<serde_json::Value> = default
            .map(|name| {
                json!({
                    "type": "ImportDefaultSpecifier",
                    "local": { "type": "Identifier", "name": name }
                })
            })
            .into_iter()
            .collect();
        specifiers.extend(named.iter().map(|name| {
            json!({
                "type": "ImportSpecifier",
                "imported": { "type": "Identifier", "name": name },
                "local": { "type": "Identifier", "name": name }
            })
        }));

        SyntaxNode::from_value(json!({
            "type": "ImportDeclaration",
            "specifiers": specifiers,
            "source": { "type": "Literal", "value": source }
        }))
        .unwrap()
    }

    // Specifiers print directly, without a dispatcher in between
    fn print_specifier(node: &SyntaxNode) -> Document {
        Specifier::cast(node)
            .map(|spec| specifier_document(&spec))
            .unwrap_or_else(empty)
    }

    fn render(node: &SyntaxNode, options: PluginOptions) -> RenderOutcome {
        ImportDeclarationRule.render(node, &RenderConfig::with_options(options), &print_specifier)
    }

    fn rendered(node: &SyntaxNode, options: PluginOptions) -> String {
        match render(node, options) {
            RenderOutcome::Rendered(doc) => Printer::new(PrinterOptions::default()).print(&doc).unwrap(),
            other => panic!("Expected Rendered, got {other:?}"),
        }
    }

    fn multiline() -> PluginOptions {
        PluginOptions {
            multiline_imports: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_defers_without_options() {
        let node = import(None, &["a", "b"], "z");
        assert_eq!(render(&node, PluginOptions::default()), RenderOutcome::Deferred);
    }

    #[test]
    fn test_sort_without_multiline_rewrites() {
        let node = import(Some("Default"), &["c", "a", "b"], "m");
        let options = PluginOptions {
            sort_imports: Some(true),
            ..Default::default()
        };

        let RenderOutcome::Rewritten(copy) = render(&node, options) else {
            panic!("Expected Rewritten");
        };
        let order: Vec<&str> = copy
            .children("specifiers")
            .iter()
            .filter_map(Specifier::cast)
            .map(|s| s.local)
            .collect();
        assert_eq!(order, vec!["Default", "a", "b", "c"]);
        assert_eq!(node.children("specifiers")[1], copy.children("specifiers")[3]);
    }

    #[test]
    fn test_multiline_layout() {
        let node = import(Some("DefaultExport"), &["a", "b"], "z");
        assert_eq!(
            rendered(&node, multiline()),
            "import DefaultExport, {\n    a,\n    b,\n  } from \"z\";"
        );
    }

    #[test]
    fn test_threshold_falls_back_to_single_line() {
        let node = import(None, &["a"], "z");
        let options = PluginOptions {
            min_items_for_multiline: Some(2),
            ..multiline()
        };
        assert_eq!(rendered(&node, options), "import { a } from \"z\";");
    }

    #[test]
    fn test_default_only() {
        let node = import(Some("React"), &[], "react");
        assert_eq!(rendered(&node, multiline()), "import React from \"react\";");
    }

    #[test]
    fn test_empty_declaration() {
        let node = SyntaxNode::new("ImportDeclaration");
        assert_eq!(rendered(&node, multiline()), "import {} from \"\";");
    }

    #[test]
    fn test_non_import_node_defers() {
        let node = SyntaxNode::new("Program");
        assert_eq!(render(&node, multiline()), RenderOutcome::Deferred);
    }
}

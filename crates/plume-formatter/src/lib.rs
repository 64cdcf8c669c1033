//! Plume Formatter
//!
//! Print-dispatch engine for ESTree syntax trees. A [`RuleRegistry`] maps node
//! kinds to [`RenderRule`]s; the [`Dispatcher`] asks the matching rule for a
//! document and falls back to a [`DelegateRenderer`] when the rule defers.
//!
//! The built-in rules lay out import declarations:
//!
//! ```
//! use plume_core::ast::SyntaxNode;
//! use plume_core::config::{PluginOptions, RenderConfig};
//! use plume_formatter::{Dispatcher, EstreeRenderer, RuleRegistry};
//!
//! let tree = SyntaxNode::from_json_str(r#"{
//!     "type": "ImportDeclaration",
//!     "specifiers": [
//!         { "type": "ImportSpecifier", "imported": { "type": "Identifier", "name": "b" }, "local": { "type": "Identifier", "name": "b" } },
//!         { "type": "ImportSpecifier", "imported": { "type": "Identifier", "name": "A" }, "local": { "type": "Identifier", "name": "A" } }
//!     ],
//!     "source": { "type": "Literal", "value": "m" }
//! }"#).unwrap();
//!
//! let registry = RuleRegistry::with_builtin_rules().unwrap();
//! let dispatcher = Dispatcher::new(&registry, Box::new(EstreeRenderer));
//! let config = RenderConfig::with_options(PluginOptions {
//!     sort_imports: Some(true),
//!     ..Default::default()
//! });
//!
//! assert_eq!(dispatcher.format(&tree, &config).unwrap(), "import { A, b } from \"m\";\n");
//! ```

pub mod baseline;
pub mod delegate;
pub mod dispatch;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod specifiers;

pub use baseline::EstreeRenderer;
pub use delegate::DelegateRenderer;
pub use dispatch::Dispatcher;
pub use registry::{ConfigError, RuleRegistry};
pub use rule::{PrintFn, RenderOutcome, RenderRule};
pub use specifiers::{ClassifiedSpecifiers, classify, sort_named};

//! Rule registry
//!
//! Maps node kinds to rendering rules, at most one rule per kind, and checks a
//! set of plugin options against what the active rules declare.

use crate::rule::RenderRule;
use crate::rules;
use indexmap::IndexMap;
use plume_core::config::PluginOptions;
use plume_core::{PlumeError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Advisory problem found while validating plugin options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two enabled options were declared incompatible
    #[error("Option '{option}' conflicts with '{conflicting}'")]
    Conflict { option: String, conflicting: String },

    /// A present option is not understood by any active rule
    #[error("Unsupported option: '{key}'")]
    Unsupported { key: String },
}

/// Registry of rendering rules keyed by node kind
///
/// Rules keep their registration order, which is also the order conflicts are
/// reported in.
#[derive(Default)]
pub struct RuleRegistry {
    rules: IndexMap<String, Box<dyn RenderRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in rule
    pub fn with_builtin_rules() -> Result<Self> {
        let mut registry = Self::new();
        for rule in rules::builtin_rules() {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// Add a rule; fails if its node kind already has one
    pub fn register(&mut self, rule: Box<dyn RenderRule>) -> Result<()> {
        let kind = rule.node_kind().to_string();
        if self.rules.contains_key(&kind) {
            return Err(PlumeError::duplicate_rule(kind));
        }

        debug!("Registering rule for {} ({})", kind, rule.option_key());
        self.rules.insert(kind, rule);
        Ok(())
    }

    pub fn lookup(&self, node_kind: &str) -> Option<&dyn RenderRule> {
        self.rules.get(node_kind).map(|rule| rule.as_ref())
    }

    /// Remove the rule for `node_kind`, if any
    pub fn unregister(&mut self, node_kind: &str) -> Option<Box<dyn RenderRule>> {
        self.rules.shift_remove(node_kind)
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rules in registration order
    pub fn rules(&self) -> impl Iterator<Item = &dyn RenderRule> {
        self.rules.values().map(|rule| rule.as_ref())
    }

    /// Check `options` against the rules it activates
    ///
    /// A rule is active when its option key is truthy. Conflicts between
    /// enabled keys are reported first, in registration order. Every present
    /// key that no active rule owns or lists as valid is then reported as
    /// unsupported. The result is advisory; rendering does not depend on it.
    pub fn validate_config(&self, options: &PluginOptions) -> Vec<ConfigError> {
        let active: Vec<&dyn RenderRule> = self
            .rules()
            .filter(|rule| options.is_enabled(rule.option_key()))
            .collect();

        let mut errors: Vec<ConfigError> = active
            .iter()
            .copied()
            .flat_map(|rule| {
                rule.conflicting_option_keys()
                    .into_iter()
                    .filter(|key| options.is_enabled(key))
                    .map(|key| ConfigError::Conflict {
                        option: rule.option_key().to_string(),
                        conflicting: key.to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let allowed: HashSet<&str> = active
            .iter()
            .copied()
            .flat_map(|rule| {
                std::iter::once(rule.option_key()).chain(rule.valid_option_keys())
            })
            .collect();

        errors.extend(
            options
                .entries()
                .into_iter()
                .filter(|(key, _)| !allowed.contains(key))
                .map(|(key, _)| ConfigError::Unsupported {
                    key: key.to_string(),
                }),
        );

        if !errors.is_empty() {
            debug!("Option validation found {} problem(s)", errors.len());
        }
        errors
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Configuration types for plume
//!
//! Plugin options are the keys rules declare and the registry validates.
//! Layout options are ambient host settings (indentation) that every rule
//! honors but no rule owns.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Option key: one-specifier-per-line import layout
pub const MULTILINE_IMPORTS: &str = "multilineImports";
/// Option key: case-insensitive sort of named import specifiers
pub const SORT_IMPORTS: &str = "sortImports";
/// Option key: named-specifier count threshold for multiline layout
pub const MIN_ITEMS_FOR_MULTILINE: &str = "minItemsForMultiline";
/// Option key: verbose dispatch tracing
pub const DEBUG: &str = "debug";
/// Option key: marker comment before variable declarations
pub const HOOK_VARIABLE_DECLARATIONS: &str = "hookVariableDeclarations";

/// Plugin options supplied once per format invocation
///
/// A key counts as *present* when its field is `Some` (or it appears in
/// `extra`). Presence drives option validation; the accessor methods resolve
/// defaults for rendering.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Format named imports one per line
    #[schemars(description = "Format imports on multiple lines")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline_imports: Option<bool>,

    /// Sort named import specifiers
    #[schemars(description = "Sort named import specifiers case-insensitively")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_imports: Option<bool>,

    /// Minimum named specifiers before multiline layout applies
    #[schemars(description = "Minimum number of named specifiers to trigger multiline formatting")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items_for_multiline: Option<usize>,

    /// Verbose dispatch tracing
    #[schemars(description = "Enable debug tracing; has no effect on output")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Prefix variable declarations with a marker comment
    #[schemars(description = "Add a hook marker before variable declarations")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_variable_declarations: Option<bool>,

    /// Keys no typed field recognizes, in the order they were supplied
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,

    /// Keys in the order a configuration source supplied them
    #[serde(skip)]
    #[schemars(skip)]
    pub key_order: Vec<String>,
}

impl<'de> Deserialize<'de> for PluginOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut options = PluginOptions::default();

        for (key, value) in raw {
            options
                .insert(&key, value)
                .map_err(|e| D::Error::custom(format!("invalid value for '{key}': {e}")))?;
            options.key_order.push(key);
        }

        Ok(options)
    }
}

impl PluginOptions {
    /// Store one supplied key in its typed field, or in `extra`
    fn insert(&mut self, key: &str, value: Value) -> serde_json::Result<()> {
        match key {
            MULTILINE_IMPORTS => self.multiline_imports = serde_json::from_value(value)?,
            SORT_IMPORTS => self.sort_imports = serde_json::from_value(value)?,
            MIN_ITEMS_FOR_MULTILINE => self.min_items_for_multiline = serde_json::from_value(value)?,
            DEBUG => self.debug = serde_json::from_value(value)?,
            HOOK_VARIABLE_DECLARATIONS => {
                self.hook_variable_declarations = serde_json::from_value(value)?
            }
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn multiline_imports(&self) -> bool {
        self.multiline_imports.unwrap_or(false)
    }

    pub fn sort_imports(&self) -> bool {
        self.sort_imports.unwrap_or(false)
    }

    /// Threshold for multiline layout. Zero is treated like unset.
    pub fn min_items_for_multiline(&self) -> usize {
        self.min_items_for_multiline
            .filter(|n| *n > 0)
            .unwrap_or(1)
    }

    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn hook_variable_declarations(&self) -> bool {
        self.hook_variable_declarations.unwrap_or(false)
    }

    /// Present keys with their values, in the order they were supplied
    ///
    /// Keys set programmatically (absent from `key_order`) follow, typed
    /// fields in declaration order and then `extra` in insertion order.
    pub fn entries(&self) -> Vec<(&str, Value)> {
        let typed = [
            (MULTILINE_IMPORTS, self.multiline_imports.map(Value::from)),
            (SORT_IMPORTS, self.sort_imports.map(Value::from)),
            (
                MIN_ITEMS_FOR_MULTILINE,
                self.min_items_for_multiline.map(Value::from),
            ),
            (DEBUG, self.debug.map(Value::from)),
            (
                HOOK_VARIABLE_DECLARATIONS,
                self.hook_variable_declarations.map(Value::from),
            ),
        ];

        let mut entries: Vec<(&str, Value)> = typed
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .collect();
        entries.sort_by_key(|(key, _)| {
            self.key_order
                .iter()
                .position(|k| k == key)
                .unwrap_or(usize::MAX)
        });
        entries
    }

    /// Value of a present key
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Whether `key` is present with a truthy value
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| is_truthy(&v))
    }

    /// Overlay `other` on top of `self`: fields set in `other` win
    pub fn merge(&mut self, other: PluginOptions) {
        if other.multiline_imports.is_some() {
            self.multiline_imports = other.multiline_imports;
        }
        if other.sort_imports.is_some() {
            self.sort_imports = other.sort_imports;
        }
        if other.min_items_for_multiline.is_some() {
            self.min_items_for_multiline = other.min_items_for_multiline;
        }
        if other.debug.is_some() {
            self.debug = other.debug;
        }
        if other.hook_variable_declarations.is_some() {
            self.hook_variable_declarations = other.hook_variable_declarations;
        }
        self.extra.extend(other.extra);
        for key in other.key_order {
            if !self.key_order.contains(&key) {
                self.key_order.push(key);
            }
        }
    }
}

/// Loose truthiness used for option activation
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ambient layout settings owned by the host formatter
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Columns per indentation level
    #[schemars(description = "Number of spaces per indentation level")]
    pub tab_width: usize,

    /// Indent with tabs instead of spaces
    #[schemars(description = "Indent with a single tab per level")]
    pub use_tabs: bool,

    /// Preferred maximum line width
    #[schemars(description = "Preferred maximum line width (informational)")]
    pub print_width: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tab_width: 2,
            use_tabs: false,
            print_width: 80,
        }
    }
}

/// Everything a single format invocation reads; never mutated by rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    pub options: PluginOptions,
    pub layout: LayoutOptions,
}

impl RenderConfig {
    pub fn new(options: PluginOptions, layout: LayoutOptions) -> Self {
        Self { options, layout }
    }

    /// Default layout with the given plugin options
    pub fn with_options(options: PluginOptions) -> Self {
        Self {
            options,
            layout: LayoutOptions::default(),
        }
    }
}

/// On-disk configuration file (`.plumerc.json` / `.plumerc.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlumeConfiguration {
    /// JSON schema reference for editor support
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Plugin options
    #[schemars(description = "Plugin options validated against the rule registry")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PluginOptions>,

    /// Layout options
    #[schemars(description = "Indentation and width settings")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,
}

impl PlumeConfiguration {
    /// Get plugin options with defaults
    pub fn options_config(&self) -> PluginOptions {
        self.options.clone().unwrap_or_default()
    }

    /// Get layout options with defaults
    pub fn layout_config(&self) -> LayoutOptions {
        self.layout.clone().unwrap_or_default()
    }

    /// Resolve into the per-invocation render configuration
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig::new(self.options_config(), self.layout_config())
    }
}

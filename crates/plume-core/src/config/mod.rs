//! Configuration system for plume
//!
//! Two groups of settings reach a format run:
//! - **plugin options** (`multilineImports`, `sortImports`, ...) which rules
//!   declare and the rule registry validates;
//! - **layout options** (`tabWidth`, `useTabs`) owned by the host.
//!
//! Both can come from a `.plumerc.json` (JSONC) or `.plumerc.toml` file,
//! discovered by walking up from the input's directory:
//!
//! ```jsonc
//! {
//!   "options": { "multilineImports": true, "sortImports": true },
//!   "layout": { "tabWidth": 4 }
//! }
//! ```

mod loader;
mod options;

pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use options::{
    DEBUG, HOOK_VARIABLE_DECLARATIONS, LayoutOptions, MIN_ITEMS_FOR_MULTILINE, MULTILINE_IMPORTS,
    PluginOptions, PlumeConfiguration, RenderConfig, SORT_IMPORTS, is_truthy,
};

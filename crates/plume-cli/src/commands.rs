//! Command implementations for the plume CLI

use anyhow::{Context, bail};
use clap::Args;
use colored::Colorize;
use plume_core::PlumeError;
use plume_core::ast::SyntaxNode;
use plume_core::config::{
    ConfigLoader, LayoutOptions, PluginOptions, PlumeConfiguration, RenderConfig,
};
use plume_formatter::{Dispatcher, EstreeRenderer, RuleRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Option flags for `plume fmt`
///
/// Flags only override the configuration file when given.
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Break named imports one per line
    #[arg(long, help = "Format named imports one per line")]
    pub multiline_imports: bool,

    /// Sort named imports case-insensitively
    #[arg(long, help = "Sort named import specifiers")]
    pub sort_imports: bool,

    /// Minimum named imports before breaking
    #[arg(long, value_name = "N", help = "Minimum named specifiers for multiline layout")]
    pub min_items_for_multiline: Option<usize>,

    /// Log every dispatch decision
    #[arg(long, help = "Enable debug tracing (does not change output)")]
    pub debug: bool,

    /// Mark variable declarations
    #[arg(long, help = "Prefix variable declarations with /* Hooked */")]
    pub hook_variable_declarations: bool,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", help = "Spaces per indentation level")]
    pub tab_width: Option<usize>,

    /// Indent with tabs
    #[arg(long, help = "Indent with tabs instead of spaces")]
    pub use_tabs: bool,
}

impl FormatArgs {
    /// Plugin options set on the command line
    pub fn plugin_options(&self) -> PluginOptions {
        PluginOptions {
            multiline_imports: self.multiline_imports.then_some(true),
            sort_imports: self.sort_imports.then_some(true),
            min_items_for_multiline: self.min_items_for_multiline,
            debug: self.debug.then_some(true),
            hook_variable_declarations: self.hook_variable_declarations.then_some(true),
            ..Default::default()
        }
    }

    /// Apply layout flags over `layout`
    pub fn apply_layout(&self, layout: &mut LayoutOptions) {
        if let Some(width) = self.tab_width {
            layout.tab_width = width;
        }
        if self.use_tabs {
            layout.use_tabs = true;
        }
    }
}

/// Format command implementation
pub fn format_command(
    file: PathBuf,
    args: FormatArgs,
    config_path: Option<PathBuf>,
    strict: bool,
    write: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source = fs::read_to_string(&file).map_err(|e| PlumeError::io_error(&file, e))?;

    let start_dir = file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = resolve_config(config_path.as_deref(), start_dir, &args)?;
    debug!("Resolved configuration: {:?}", config);

    let registry = RuleRegistry::with_builtin_rules()?;
    let problems = registry.validate_config(&config.options);
    for problem in &problems {
        eprintln!("{} {}", "warning:".yellow().bold(), problem);
    }
    if strict && !problems.is_empty() {
        bail!("{} configuration problem(s) in strict mode", problems.len());
    }

    let tree = SyntaxNode::from_json_str(&source)
        .with_context(|| format!("Failed to read syntax tree from {}", file.display()))?;

    let dispatcher = Dispatcher::new(&registry, Box::new(EstreeRenderer::new()));
    let output = dispatcher.format(&tree, &config)?;

    match write {
        Some(out) => {
            fs::write(&out, &output).map_err(|e| PlumeError::io_error(&out, e))?;
            info!("Wrote {}", out.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

/// File configuration with command-line flags layered on top
fn resolve_config(
    config_path: Option<&Path>,
    start_dir: &Path,
    args: &FormatArgs,
) -> anyhow::Result<RenderConfig> {
    let file_config = ConfigLoader::load(config_path, Some(start_dir))?;

    let mut options = file_config.options_config();
    options.merge(args.plugin_options());

    let mut layout = file_config.layout_config();
    args.apply_layout(&mut layout);

    Ok(RenderConfig::new(options, layout))
}

/// Rules command implementation
pub fn rules_command() -> anyhow::Result<()> {
    let registry = RuleRegistry::with_builtin_rules()?;

    println!("Registered rules:");
    println!("=================");
    for rule in registry.rules() {
        println!("{:<26} {}", rule.node_kind().bold(), rule.option_key());

        let valid = rule.valid_option_keys();
        if !valid.is_empty() {
            println!("  Options: {}", valid.join(", "));
        }
        let conflicting = rule.conflicting_option_keys();
        if !conflicting.is_empty() {
            println!("  Conflicts with: {}", conflicting.join(", "));
        }
    }
    println!("\nTotal: {} rules", registry.len());

    Ok(())
}

/// Config schema command implementation
pub fn config_schema_command() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(PlumeConfiguration);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Config show command implementation
pub fn config_show_command(
    path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let start_dir = path.unwrap_or_else(|| PathBuf::from("."));
    let file_config = ConfigLoader::load(config_path.as_deref(), Some(start_dir.as_path()))?;

    let resolved = PlumeConfiguration {
        schema: None,
        options: Some(file_config.options_config()),
        layout: Some(file_config.layout_config()),
    };
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

//! Plume Core
//!
//! Shared building blocks for the plume print-dispatch engine: the syntax
//! tree model, the document IR and its printer, configuration and errors.

pub mod ast;
pub mod config;
pub mod doc;
pub mod error;

pub use ast::{AstNode, Field, ImportDeclaration, Specifier, SpecifierKind, SyntaxNode};
pub use config::{
    ConfigLoader, LayoutOptions, PluginOptions, PlumeConfiguration, RenderConfig, is_truthy,
};
pub use doc::{Document, PrintError, Printer, PrinterOptions};
pub use error::{ErrorKind, PlumeError, Result};

/// Initialize the tracing subscriber for logging
///
/// `default_filter` applies when `RUST_LOG` is unset.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

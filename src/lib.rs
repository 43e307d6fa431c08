/// Handles argument parsing and command execution.
pub mod cli;

/// YAML configuration store with dot-path access.
pub mod config;

/// Shared constants.
pub mod constants;

/// Default template directory discovery.
pub mod environment;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template lookup across prioritized search paths.
pub mod locator;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Variable mappings built from configuration and overrides.
pub mod variables;

pub use config::TemplateConfig;
pub use environment::{Environment, StaticEnvironment, SystemEnvironment};
pub use error::{Error, ErrorKind, Result};
pub use locator::{TemplateInfo, TemplateLocator};
pub use renderer::{MiniJinjaRenderer, TemplateRenderer};
pub use variables::Variables;

//! Template rendering engine
//!
//! The module is structured as:
//! - `interface`: the `TemplateRenderer` trait and its provided file operations
//! - `minijinja`: MiniJinja-based implementation of the template renderer
//! - `filters`: Custom filters for code generation

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;

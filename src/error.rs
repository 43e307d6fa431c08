use crate::constants::exit_codes;
use thiserror::Error;

/// Broad classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A config file, template or output directory does not exist.
    NotFound,
    /// The caller asked for something that cannot be done with the given input.
    InvalidArgument,
    /// An underlying filesystem or terminal failure.
    Io,
    /// YAML or JSON (de)serialization failure.
    Serialization,
    /// The template engine failed to parse or render a template.
    Render,
    /// Anything else.
    Other,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("No configuration file specified")]
    ConfigPathMissing,

    #[error("Template '{name}' not found in {template_dir}")]
    TemplateNotFound { name: String, template_dir: String },

    #[error("Cannot write '{output}': parent directory '{parent}' does not exist.")]
    OutputDirectoryMissing { output: String, parent: String },

    #[error("Failed to render. Original error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Cannot ask \"{prompt}\" without an interactive terminal. Use --force to skip the prompt.")]
    NonInteractive { prompt: String },

    #[error("Prompt failed: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigNotFound { .. }
            | Error::TemplateNotFound { .. }
            | Error::OutputDirectoryMissing { .. } => ErrorKind::NotFound,
            Error::ConfigPathMissing | Error::NonInteractive { .. } => ErrorKind::InvalidArgument,
            Error::IoError(_) | Error::DialoguerError(_) => ErrorKind::Io,
            Error::YamlError(_) | Error::JsonError(_) => ErrorKind::Serialization,
            Error::Render(_) => ErrorKind::Render,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(exit_codes::FAILURE);
}

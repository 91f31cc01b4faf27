//! Error types for the pyclient generator.

use pyclient_define::DefinitionError;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal: a run either writes all of its files or none.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The API definition could not be found or parsed.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// A service could not be rendered into valid Python.
    #[error("Failed to render service '{service}': {reason}")]
    Render { service: String, reason: String },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    pub(crate) fn render(service: &str, reason: impl Into<String>) -> Self {
        GeneratorError::Render {
            service: service.to_string(),
            reason: reason.into(),
        }
    }
}

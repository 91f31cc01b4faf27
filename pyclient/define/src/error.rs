//! Error types for loading API definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an API definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition file does not exist.
    #[error("API definition not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The definition file exists but could not be read.
    #[error("failed to read API definition '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed API definition.
    #[error("failed to parse API definition '{origin}': {source}")]
    Parse {
        /// File path, or `<inline>` for in-memory input.
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

//! Loading API definitions from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::DefinitionError;
use crate::types::ApiDefinition;

/// Environment variable that overrides the definition file location.
pub const DEFINITION_PATH_ENV: &str = "APIS_JSON";

/// Definition file location used when [`DEFINITION_PATH_ENV`] is not set.
pub const DEFAULT_DEFINITION_PATH: &str = "taskcluster/apis.json";

/// Reads and parses the API definition at `path`.
///
/// ## Errors
///
/// - [`DefinitionError::NotFound`] if the file does not exist
/// - [`DefinitionError::Read`] for any other I/O failure
/// - [`DefinitionError::Parse`] if the content is not a valid definition
pub fn load_definition(path: impl AsRef<Path>) -> Result<ApiDefinition, DefinitionError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading API definition");

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DefinitionError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DefinitionError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let definition = parse_with_origin(&content, &path.display().to_string())?;
    info!(
        path = %path.display(),
        services = definition.len(),
        "loaded API definition"
    );
    Ok(definition)
}

/// Parses an API definition held in memory.
///
/// ## Errors
///
/// Returns [`DefinitionError::Parse`] if `content` is not a valid definition.
pub fn parse_definition(content: &str) -> Result<ApiDefinition, DefinitionError> {
    parse_with_origin(content, "<inline>")
}

fn parse_with_origin(content: &str, origin: &str) -> Result<ApiDefinition, DefinitionError> {
    serde_json::from_str(content).map_err(|source| DefinitionError::Parse {
        origin: origin.to_string(),
        source,
    })
}

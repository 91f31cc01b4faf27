//! Output planning and file writing for generated code.
//!
//! Generation happens in two phases. [`plan`] renders every file in memory;
//! any render error aborts the run before a single byte reaches disk. The
//! planned files are then written with [`write_atomic`], or printed in dry-run
//! mode.
//!
//! ## Output Structure
//!
//! ```text
//! <code_dir>/
//! ├── Queue.py              # one client module per service
//! ├── __init__.py           # re-exports every client
//! └── generated-files.txt   # manifest of written paths
//! <test_dir>/
//! └── testQueue.py          # one test scaffold per service
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use pyclient_define::{ApiDefinition, Entry, load_definition};
use tracing::{debug, info, warn};

use crate::codegen::{render_client, render_index, render_manifest, render_test_module};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Paths written (or printed, in dry-run mode), in write order. The
    /// manifest is last.
    pub written: Vec<PathBuf>,
    /// Entries skipped because their type is not recognized.
    pub skipped_entries: usize,
}

/// Renders every output file for `definition` without touching the disk.
///
/// Files come back in write order: for each service (sorted by name) its
/// client module then its test scaffold, then the package index, then the
/// manifest listing all of the preceding paths.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` if any service fails to render, and
/// `GeneratorError::ConfigError` if two planned files share a path.
pub fn plan(
    definition: &ApiDefinition,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut files = Vec::with_capacity(definition.len() * 2 + 2);

    for (name, service) in definition.services() {
        if service.reference.entries.is_empty() {
            warn!(service = name, "service has no entries");
        }

        files.push(GeneratedFile {
            path: config.client_path(name),
            content: render_client(name, service, config)?,
        });
        files.push(GeneratedFile {
            path: config.test_path(name),
            content: render_test_module(name, service, config)?,
        });
        debug!(service = name, "planned client and test scaffold");
    }

    let names: Vec<&str> = definition.names().collect();
    files.push(GeneratedFile {
        path: config.index_path(),
        content: render_index(&names, &config.package),
    });

    let paths: Vec<&Path> = files.iter().map(|file| file.path.as_path()).collect();
    let manifest = render_manifest(&paths);
    files.push(GeneratedFile {
        path: config.manifest_path(),
        content: manifest,
    });

    let mut seen = HashSet::new();
    for file in &files {
        if !seen.insert(file.path.as_path()) {
            return Err(GeneratorError::ConfigError(format!(
                "'{}' would be generated more than once",
                file.path.display()
            )));
        }
    }

    Ok(files)
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. Readers see either the old
/// content or the new content, never a truncated file.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GeneratorError::WriteError {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    Ok(())
}

/// Generates and writes all files for `definition`.
///
/// In dry-run mode the planned files are printed to stdout instead of being
/// written.
///
/// ## Errors
///
/// Returns an error if the configuration is invalid, any service fails to
/// render, or a file cannot be written.
pub fn generate(
    definition: &ApiDefinition,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<GenerationReport, GeneratorError> {
    config.validate()?;

    let files = plan(definition, config)?;
    let skipped_entries = definition
        .services()
        .flat_map(|(_, service)| service.reference.entries.iter())
        .filter(|entry| matches!(entry, Entry::Unrecognized))
        .count();
    if skipped_entries > 0 {
        info!(skipped_entries, "skipped entries of unrecognized type");
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        if dry_run {
            println!("=== {} ===\n{}", file.path.display(), file.content);
        } else {
            write_atomic(&file.path, &file.content)?;
            info!(path = %file.path.display(), "wrote file");
        }
        written.push(file.path);
    }

    Ok(GenerationReport {
        written,
        skipped_entries,
    })
}

/// Loads the definition at `definition_path` and generates from it.
///
/// ## Errors
///
/// Returns `GeneratorError::Definition` if the definition cannot be loaded,
/// and otherwise the errors of [`generate`].
pub fn generate_from_path(
    definition_path: &Path,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<GenerationReport, GeneratorError> {
    let definition = load_definition(definition_path)?;
    generate(&definition, config, dry_run)
}

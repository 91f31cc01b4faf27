//! Generator configuration.
//!
//! [`GeneratorConfig`] collects everything that shapes a run besides the API
//! definition itself: where files go, how generated modules import each other,
//! how wide docstrings wrap, and which routing-key fields are carried into the
//! generated code.

use std::path::{Path, PathBuf};

use crate::codegen::is_identifier;
use crate::errors::GeneratorError;

/// Routing-key fields carried into generated code unless configured otherwise.
pub const DEFAULT_ROUTING_KEY_FIELDS: &[&str] =
    &["name", "summary", "required", "constant", "multipleWords"];

/// Column at which docstrings wrap.
pub const DEFAULT_WRAP_WIDTH: usize = 100;

pub const DEFAULT_CODE_DIR: &str = "taskcluster/sync";
pub const DEFAULT_TEST_DIR: &str = "test";
pub const DEFAULT_PACKAGE: &str = "taskcluster.sync";
pub const DEFAULT_BASE_MODULE: &str = "taskcluster.runtimeclient";

/// File name of the manifest when no explicit path is configured.
pub const MANIFEST_FILE_NAME: &str = "generated-files.txt";

const MIN_WRAP_WIDTH: usize = 20;

/// Settings for one generator run.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.wrap_width, 100);
/// assert!(config.manifest_path().ends_with("generated-files.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving client modules and the package index.
    pub code_dir: PathBuf,
    /// Directory receiving test scaffolds.
    pub test_dir: PathBuf,
    /// Explicit manifest location; defaults to [`MANIFEST_FILE_NAME`] in `code_dir`.
    pub manifest: Option<PathBuf>,
    /// Dotted Python package the client modules live in.
    pub package: String,
    /// Dotted Python module providing `BaseClient` and its helpers.
    pub base_module: String,
    /// Routing-key fields kept in generated literals, in emission order.
    pub routing_key_fields: Vec<String>,
    pub wrap_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            code_dir: PathBuf::from(DEFAULT_CODE_DIR),
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            manifest: None,
            package: DEFAULT_PACKAGE.to_string(),
            base_module: DEFAULT_BASE_MODULE.to_string(),
            routing_key_fields: DEFAULT_ROUTING_KEY_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl GeneratorConfig {
    /// Creates a default configuration writing below `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            code_dir: root.join(DEFAULT_CODE_DIR),
            test_dir: root.join(DEFAULT_TEST_DIR),
            ..Self::default()
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.code_dir.join(MANIFEST_FILE_NAME))
    }

    /// Path of the client module for `service`.
    pub fn client_path(&self, service: &str) -> PathBuf {
        self.code_dir.join(format!("{}.py", service))
    }

    /// Path of the test scaffold for `service`.
    pub fn test_path(&self, service: &str) -> PathBuf {
        self.test_dir.join(format!("test{}.py", service))
    }

    pub fn index_path(&self) -> PathBuf {
        self.code_dir.join("__init__.py")
    }

    /// Checks that the configuration can produce importable Python.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the wrap width is below 20
    /// columns, a module path is not a dotted Python identifier, or the
    /// routing-key allow-list is empty.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.wrap_width < MIN_WRAP_WIDTH {
            return Err(GeneratorError::ConfigError(format!(
                "wrap width must be at least {} columns, got {}",
                MIN_WRAP_WIDTH, self.wrap_width
            )));
        }

        for (label, module) in [("package", &self.package), ("base module", &self.base_module)] {
            if !is_dotted_path(module) {
                return Err(GeneratorError::ConfigError(format!(
                    "{} '{}' is not a dotted Python module path",
                    label, module
                )));
            }
        }

        if self.routing_key_fields.is_empty() {
            return Err(GeneratorError::ConfigError(
                "routing-key field allow-list must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_dotted_path(module: &str) -> bool {
    !module.is_empty() && module.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allow_list_matches_known_fields() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.routing_key_fields,
            vec!["name", "summary", "required", "constant", "multipleWords"]
        );
    }

    #[test]
    fn paths_derive_from_directories() {
        let config = GeneratorConfig::rooted_at(Path::new("/out"));
        assert_eq!(
            config.client_path("Queue"),
            PathBuf::from("/out/taskcluster/sync/Queue.py")
        );
        assert_eq!(config.test_path("Queue"), PathBuf::from("/out/test/testQueue.py"));
        assert_eq!(
            config.index_path(),
            PathBuf::from("/out/taskcluster/sync/__init__.py")
        );
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/out/taskcluster/sync/generated-files.txt")
        );
    }

    #[test]
    fn explicit_manifest_wins() {
        let config = GeneratorConfig {
            manifest: Some(PathBuf::from("dist/files.txt")),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.manifest_path(), PathBuf::from("dist/files.txt"));
    }

    #[test]
    fn rejects_narrow_width() {
        let config = GeneratorConfig {
            wrap_width: 10,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::ConfigError(_))));
    }

    #[test]
    fn rejects_invalid_package() {
        for package in ["", "taskcluster..sync", "task-cluster.sync", "1st.pkg", "import"] {
            let config = GeneratorConfig {
                package: package.to_string(),
                ..GeneratorConfig::default()
            };
            assert!(config.validate().is_err(), "package '{}' should be rejected", package);
        }
    }

    #[test]
    fn rejects_empty_allow_list() {
        let config = GeneratorConfig {
            routing_key_fields: vec![],
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("allow-list"));
    }
}

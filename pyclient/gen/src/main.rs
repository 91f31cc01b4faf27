//! Pyclient Code Generator
//!
//! Generates typed Python API clients from a JSON API definition.

use std::path::PathBuf;

use clap::Parser;
use pyclient_define::{DEFAULT_DEFINITION_PATH, DEFINITION_PATH_ENV};
use pyclient_gen::config::{
    DEFAULT_BASE_MODULE, DEFAULT_CODE_DIR, DEFAULT_PACKAGE, DEFAULT_ROUTING_KEY_FIELDS,
    DEFAULT_TEST_DIR, DEFAULT_WRAP_WIDTH, GeneratorConfig,
};
use pyclient_gen::errors::GeneratorError;
use pyclient_gen::output::generate_from_path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pyclient code generator - transforms API definitions into typed Python clients
#[derive(Parser, Debug)]
#[command(name = "pyclient-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API definition file
    #[arg(long, env = DEFINITION_PATH_ENV, default_value = DEFAULT_DEFINITION_PATH)]
    definition: PathBuf,

    /// Output directory for client modules and the package index
    #[arg(long, default_value = DEFAULT_CODE_DIR)]
    code_dir: PathBuf,

    /// Output directory for test scaffolds
    #[arg(long, default_value = DEFAULT_TEST_DIR)]
    test_dir: PathBuf,

    /// Manifest path (defaults to generated-files.txt in the code directory)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Python package the client modules are imported from
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Python module providing BaseClient
    #[arg(long, default_value = DEFAULT_BASE_MODULE)]
    base_module: String,

    /// Routing-key field to keep in generated code (repeatable)
    #[arg(long = "routing-key-field", value_name = "FIELD")]
    routing_key_fields: Vec<String>,

    /// Docstring wrap width
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    width: usize,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let routing_key_fields = if self.routing_key_fields.is_empty() {
            DEFAULT_ROUTING_KEY_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect()
        } else {
            self.routing_key_fields.clone()
        };

        GeneratorConfig {
            code_dir: self.code_dir.clone(),
            test_dir: self.test_dir.clone(),
            manifest: self.manifest.clone(),
            package: self.package.clone(),
            base_module: self.base_module.clone(),
            routing_key_fields,
            wrap_width: self.width,
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    info!(
        definition = %cli.definition.display(),
        code_dir = %config.code_dir.display(),
        test_dir = %config.test_dir.display(),
        dry_run = cli.dry_run,
        "generating clients"
    );

    let report = generate_from_path(&cli.definition, &config, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "Generated {} files (manifest: {})",
            report.written.len(),
            config.manifest_path().display()
        );
    }

    Ok(())
}

//! Python code generation modules.
//!
//! This module contains submodules for generating each piece of the Python
//! package:
//!
//! - [`function`] - Methods and `funcinfo` records for HTTP functions
//! - [`topic`] - Methods and exchange references for topic exchanges
//! - [`client`] - Complete client module per service
//! - [`test_scaffold`] - `unittest` scaffold per service
//! - [`index`] - Package `__init__.py` and the manifest of written files

pub mod client;
pub mod function;
pub mod index;
pub mod test_scaffold;
pub mod topic;

pub use client::render_client;
pub use function::{function_docstring, render_function_method};
pub use index::{render_index, render_manifest};
pub use test_scaffold::render_test_module;
pub use topic::{render_topic_method, topic_docstring};

use pyclient_define::Entry;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::records::FunctionInfo;

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "# This file is generated!  Do not edit!";

/// Helpers every client module re-exports next to its own class.
pub const SHARED_EXPORTS: &[&str] = &[
    "createTemporaryCredentials",
    "config",
    "_defaultConfig",
    "createApiClient",
    "createSession",
];

/// Names every client module imports from the base-client module.
pub(crate) const BASE_IMPORTS: &[&str] = &[
    "BaseClient",
    "createApiClient",
    "config",
    "createTemporaryCredentials",
    "createSession",
];

/// Indentation of methods inside the class body.
pub(crate) const METHOD_INDENT: usize = 4;

/// Indentation of statements inside a method body.
pub(crate) const BODY_INDENT: usize = 8;

/// Python 3 keywords plus the Python 2 statements `exec` and `print`, so the
/// output parses under both.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "exec", "finally", "for", "from",
    "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "print",
    "raise", "return", "try", "while", "with", "yield",
];

/// Service names that collide with the package index or with names every
/// client module imports or exports.
pub(crate) const RESERVED_SERVICE_NAMES: &[&str] = &[
    "__init__",
    "BaseClient",
    "createApiClient",
    "config",
    "createTemporaryCredentials",
    "createSession",
    "_defaultConfig",
];

/// Entry names that collide with client class attributes, the base-client
/// dispatch helpers, or the scaffold's fixed `test_client_constructs`.
pub(crate) const RESERVED_ENTRY_NAMES: &[&str] = &[
    "__init__",
    "classOptions",
    "referenceUrl",
    "funcinfo",
    "routes",
    "routingKeys",
    "_makeApiCall",
    "_makeTopicExchange",
    "client_constructs",
];

/// Returns true if `name` can be used as a Python identifier.
///
/// Only ASCII identifiers are accepted; keywords are rejected.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::codegen::is_identifier;
///
/// assert!(is_identifier("taskId"));
/// assert!(is_identifier("_defaultConfig"));
/// assert!(!is_identifier("task-id"));
/// assert!(!is_identifier("2fa"));
/// assert!(!is_identifier("class"));
/// assert!(!is_identifier("print"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !PYTHON_KEYWORDS.contains(&name)
}

/// Output of rendering one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub name: String,
    /// Complete method source, indented for the class body.
    pub method: String,
    /// `funcinfo` record; `None` for topic exchanges, whose metadata is
    /// inlined at the call site.
    pub info: Option<FunctionInfo>,
}

/// Renders one entry of a service.
///
/// Returns `None` for [`Entry::Unrecognized`]: entry kinds this generator
/// does not know are skipped so that newer definitions still generate.
pub fn render_entry(entry: &Entry, config: &GeneratorConfig) -> Option<RenderedEntry> {
    match entry {
        Entry::Function(function) => Some(RenderedEntry {
            name: function.name.clone(),
            method: render_function_method(function, config.wrap_width),
            info: Some(FunctionInfo::from_entry(function)),
        }),
        Entry::TopicExchange(exchange) => Some(RenderedEntry {
            name: exchange.name.clone(),
            method: render_topic_method(exchange, &config.routing_key_fields, config.wrap_width),
            info: None,
        }),
        Entry::Unrecognized => {
            debug!("skipping entry of unrecognized type");
            None
        }
    }
}

/// Joins non-empty, trimmed paragraphs with blank lines.
pub(crate) fn join_paragraphs(paragraphs: Vec<String>) -> Option<String> {
    let kept: Vec<String> = paragraphs
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    (!kept.is_empty()).then(|| kept.join("\n\n"))
}

/// Renders a docstring block at `indent`, ending with a newline.
pub(crate) fn docstring_block(text: &str, indent: usize, width: usize) -> String {
    let pad = " ".repeat(indent);
    format!(
        "{pad}\"\"\"\n{pad}{}\n{pad}\"\"\"\n",
        crate::docstring::typeset_docstring(text, indent, width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyclient_define::{FunctionEntry, TopicExchangeEntry};

    #[test]
    fn identifiers_reject_empty_and_unicode() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("tâche"));
        assert!(is_identifier("Queue"));
    }

    #[test]
    fn python2_statements_are_not_identifiers() {
        assert!(!is_identifier("print"));
        assert!(!is_identifier("exec"));
        assert!(is_identifier("printer"));
    }

    #[test]
    fn unrecognized_entries_render_nothing() {
        let config = GeneratorConfig::default();
        assert_eq!(render_entry(&Entry::Unrecognized, &config), None);
    }

    #[test]
    fn functions_carry_info_and_topics_do_not() {
        let config = GeneratorConfig::default();
        let function = Entry::Function(FunctionEntry {
            name: "ping".into(),
            route: "/ping".into(),
            method: "get".into(),
            ..Default::default()
        });
        let topic = Entry::TopicExchange(TopicExchangeEntry {
            name: "taskDefined".into(),
            exchange: "task-defined".into(),
            ..Default::default()
        });

        let rendered = render_entry(&function, &config).unwrap();
        assert_eq!(rendered.name, "ping");
        assert!(rendered.info.is_some());

        let rendered = render_entry(&topic, &config).unwrap();
        assert_eq!(rendered.name, "taskDefined");
        assert!(rendered.info.is_none());
    }

    #[test]
    fn paragraphs_skip_blank_parts() {
        let joined = join_paragraphs(vec!["  Title ".into(), "".into(), "Body".into()]);
        assert_eq!(joined.as_deref(), Some("Title\n\nBody"));
        assert_eq!(join_paragraphs(vec![" ".into()]), None);
    }

    #[test]
    fn docstring_block_wraps_in_triple_quotes() {
        assert_eq!(
            docstring_block("Ping\n\nBody", 8, 100),
            "        \"\"\"\n        Ping\n\n        Body\n        \"\"\"\n"
        );
    }
}

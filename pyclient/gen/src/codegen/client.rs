//! Client module generation.
//!
//! Produces one complete Python module per service:
//!
//! ```text
//! # This file is generated!  Do not edit!
//! <imports from the base-client module>
//!
//! class Queue(BaseClient):
//!     """<service docs>"""
//!     classOptions = {...}
//!     referenceUrl = '...'
//!
//!     def <entry>(self, ...): ...
//!
//!     funcinfo = {...}
//!     routes = {...}
//!     routingKeys = {...}
//!
//! __all__ = [...]
//! ```

use std::collections::HashSet;

use pyclient_define::{Entry, ServiceDefinition};
use tracing::debug;

use super::function::method_parameters;
use super::{
    BASE_IMPORTS, GENERATED_MARKER, METHOD_INDENT, RESERVED_ENTRY_NAMES, RESERVED_SERVICE_NAMES,
    RenderedEntry, SHARED_EXPORTS, docstring_block, is_identifier, join_paragraphs, render_entry,
};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::literal::{PyValue, ToPyLiteral, quote};
use crate::transcode::{routes_table, routing_keys_table};

/// Renders the client module for one service.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` if the service name, an entry name, or a
/// parameter name is not a valid Python identifier or is reserved by the
/// generated code, if two entries share a name, if a method would declare the
/// same parameter twice, or if a route contains a literal `{` or `}`.
pub fn render_client(
    service: &str,
    definition: &ServiceDefinition,
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    validate_service(service, definition)?;
    let spec = &definition.reference;

    let rendered: Vec<RenderedEntry> = spec
        .entries
        .iter()
        .filter_map(|entry| render_entry(entry, config))
        .collect();
    debug!(
        service,
        entries = spec.entries.len(),
        rendered = rendered.len(),
        "rendered client entries"
    );

    let pad = " ".repeat(METHOD_INDENT);
    let mut out = String::new();

    out.push_str(GENERATED_MARKER);
    out.push('\n');
    out.push_str("# coding=utf-8\n");
    out.push_str("# noqa: E128,E201\n");
    for name in BASE_IMPORTS {
        out.push_str(&format!("from {} import {}\n", config.base_module, name));
    }
    out.push_str("_defaultConfig = config\n\n\n");

    out.push_str(&format!("class {}(BaseClient):\n", service));
    let class_doc = join_paragraphs(
        [spec.title.clone(), spec.description.clone()]
            .into_iter()
            .flatten()
            .collect(),
    );
    if let Some(doc) = class_doc {
        out.push_str(&docstring_block(&doc, METHOD_INDENT, config.wrap_width));
        out.push('\n');
    }

    let mut options = Vec::new();
    if let Some(base_url) = &spec.base_url {
        options.push(("baseUrl".to_string(), PyValue::str(base_url)));
    }
    if let Some(prefix) = &spec.exchange_prefix {
        options.push(("exchangePrefix".to_string(), PyValue::str(prefix)));
    }
    out.push_str(&format!(
        "{pad}classOptions = {}\n",
        PyValue::Dict(options).render(METHOD_INDENT)
    ));
    if let Some(url) = &definition.reference_url {
        out.push_str(&format!("{pad}referenceUrl = {}\n", quote(url)));
    }
    out.push('\n');

    for entry in &rendered {
        out.push_str(&entry.method);
        out.push('\n');
    }

    let funcinfo = PyValue::Dict(
        rendered
            .iter()
            .filter_map(|entry| {
                entry
                    .info
                    .as_ref()
                    .map(|info| (entry.name.clone(), info.to_literal()))
            })
            .collect(),
    );
    out.push_str(&format!("{pad}funcinfo = {}\n\n", funcinfo.render(METHOD_INDENT)));
    out.push_str(&format!(
        "{pad}routes = {}\n\n",
        routes_table(spec).render(METHOD_INDENT)
    ));
    out.push_str(&format!(
        "{pad}routingKeys = {}\n\n\n",
        routing_keys_table(spec, &config.routing_key_fields).render(METHOD_INDENT)
    ));

    let exports: Vec<&str> = SHARED_EXPORTS
        .iter()
        .copied()
        .chain(std::iter::once(service))
        .collect();
    out.push_str(&format!(
        "__all__ = {}\n",
        PyValue::str_list(exports).render(0)
    ));

    Ok(out)
}

/// Checks the names a client module is built from.
pub(crate) fn validate_service(
    service: &str,
    definition: &ServiceDefinition,
) -> Result<(), GeneratorError> {
    if !is_identifier(service) {
        return Err(GeneratorError::render(
            service,
            "service name is not a valid Python identifier",
        ));
    }
    if RESERVED_SERVICE_NAMES.contains(&service) {
        return Err(GeneratorError::render(
            service,
            "service name is reserved by the generated package",
        ));
    }

    let mut seen = HashSet::new();
    for entry in &definition.reference.entries {
        let Some(name) = entry.name() else {
            continue;
        };
        if !is_identifier(name) {
            return Err(GeneratorError::render(
                service,
                format!("entry name '{}' is not a valid Python identifier", name),
            ));
        }
        if RESERVED_ENTRY_NAMES.contains(&name) {
            return Err(GeneratorError::render(
                service,
                format!("entry name '{}' is reserved by the generated client", name),
            ));
        }
        if !seen.insert(name) {
            return Err(GeneratorError::render(
                service,
                format!("duplicate entry name '{}'", name),
            ));
        }

        if let Entry::Function(function) = entry {
            // Routes are formatted with `str.format`, so braces are placeholders only.
            if function.route.contains(['{', '}']) {
                return Err(GeneratorError::render(
                    service,
                    format!("route '{}' of '{}' contains a literal brace", function.route, name),
                ));
            }

            let mut params = HashSet::new();
            for param in method_parameters(function) {
                let param = param.trim_end_matches("=None").to_string();
                if !is_identifier(&param) {
                    return Err(GeneratorError::render(
                        service,
                        format!("argument '{}' of '{}' is not a valid Python identifier", param, name),
                    ));
                }
                if !params.insert(param.clone()) {
                    return Err(GeneratorError::render(
                        service,
                        format!("'{}' declares parameter '{}' more than once", name, param),
                    ));
                }
            }
        }
    }
    Ok(())
}

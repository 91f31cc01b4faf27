//! Core types for service API definitions.
//!
//! The definition file maps service names to a [`ServiceDefinition`], whose
//! `reference` block ([`ServiceSpec`]) lists the callable [`Entry`] values of
//! that service:
//!
//! - [`FunctionEntry`] - an HTTP call with a route template and method
//! - [`TopicExchangeEntry`] - a pub/sub exchange with an ordered routing key
//!
//! All types deserialize from the camelCase JSON layout of the definition file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete API definition: service name to service definition.
///
/// Services are kept in a sorted map so every consumer iterates them in the
/// same order, independent of the key order of the source document.
///
/// ## Examples
///
/// ```
/// use pyclient_define::parse_definition;
///
/// let json = r#"{
///     "Queue": {
///         "reference": { "entries": [] },
///         "referenceUrl": "https://example.com/queue/v1/api.json"
///     }
/// }"#;
///
/// let definition = parse_definition(json).unwrap();
/// assert_eq!(definition.len(), 1);
/// assert!(definition.get("Queue").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDefinition {
    services: BTreeMap<String, ServiceDefinition>,
}

impl ApiDefinition {
    /// Creates a definition from `(name, service)` pairs.
    pub fn from_services<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = (S, ServiceDefinition)>,
        S: Into<String>,
    {
        Self {
            services: services
                .into_iter()
                .map(|(name, service)| (name.into(), service))
                .collect(),
        }
    }

    /// Iterates services in sorted name order.
    pub fn services(&self) -> impl Iterator<Item = (&str, &ServiceDefinition)> {
        self.services
            .iter()
            .map(|(name, service)| (name.as_str(), service))
    }

    /// Service names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.get(name)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// One named service as it appears in the definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// The API reference describing the service's entries.
    pub reference: ServiceSpec,
    /// Where the reference document was published, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

/// The reference block of a service.
///
/// `base_url` and `exchange_prefix` become client configuration options in the
/// generated code, and only when they are present here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entries in declaration order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl ServiceSpec {
    /// Function entries in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Function(function) => Some(function),
            _ => None,
        })
    }

    /// Topic-exchange entries in declaration order.
    pub fn topic_exchanges(&self) -> impl Iterator<Item = &TopicExchangeEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::TopicExchange(exchange) => Some(exchange),
            _ => None,
        })
    }
}

/// A single entry of a service, tagged by its `type` field.
///
/// Entry kinds this crate does not know about deserialize to
/// [`Entry::Unrecognized`] instead of failing, so a definition produced by a
/// newer service still loads. Generators emit nothing for such entries.
///
/// ## Examples
///
/// ```
/// use pyclient_define::Entry;
///
/// let entry: Entry = serde_json::from_str(r#"{"type": "websocket", "name": "x"}"#).unwrap();
/// assert_eq!(entry, Entry::Unrecognized);
/// assert_eq!(entry.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entry {
    #[serde(rename = "function")]
    Function(FunctionEntry),
    #[serde(rename = "topic-exchange")]
    TopicExchange(TopicExchangeEntry),
    #[serde(other)]
    Unrecognized,
}

impl Entry {
    /// The entry name, or `None` for unrecognized entries.
    pub fn name(&self) -> Option<&str> {
        match self {
            Entry::Function(function) => Some(&function.name),
            Entry::TopicExchange(exchange) => Some(&exchange.name),
            Entry::Unrecognized => None,
        }
    }

    /// The `type` tag this entry was declared with.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Function(_) => "function",
            Entry::TopicExchange(_) => "topic-exchange",
            Entry::Unrecognized => "unrecognized",
        }
    }
}

/// An HTTP function exposed by a service.
///
/// `route` uses angle-bracket placeholders (`/task/<taskId>`), each of which
/// normally corresponds to one of `args`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    pub name: String,
    pub route: String,
    /// HTTP verb, kept exactly as declared (e.g. `get`).
    pub method: String,
    /// Positional arguments in declaration order.
    #[serde(default)]
    pub args: Vec<String>,
    /// Accepted query-string options. Presence matters even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<String>>,
    /// Schema reference of the request payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Schema reference of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A pub/sub topic exchange published by a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicExchangeEntry {
    pub name: String,
    /// Exchange identifier, relative to the service's exchange prefix.
    pub exchange: String,
    /// Routing key parts in declaration order.
    #[serde(default)]
    pub routing_key: Vec<RoutingKeyPart>,
    /// Schema reference of published messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One positional part of a routing key.
///
/// Besides the typed fields, every other field of the source document is kept
/// in `extra` so that callers can select fields by name with
/// [`RoutingKeyPart::field`].
///
/// ## Examples
///
/// ```
/// use pyclient_define::RoutingKeyPart;
/// use serde_json::json;
///
/// let part: RoutingKeyPart = serde_json::from_value(json!({
///     "name": "routingKeyKind",
///     "constant": "primary",
///     "multipleWords": false
/// }))
/// .unwrap();
///
/// assert_eq!(part.field("constant"), Some(json!("primary")));
/// assert_eq!(part.field("required"), None);
/// assert!(!part.is_required());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingKeyPart {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// `None` when the source did not declare the field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RoutingKeyPart {
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Returns the value of a field as declared in the source, if present.
    pub fn field(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(Value::String(self.name.clone())),
            "summary" => self.summary.clone().map(Value::String),
            "required" => self.required.map(Value::Bool),
            other => self.extra.get(other).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn function_entry_deserializes_with_optional_fields() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "function",
            "name": "createTask",
            "route": "/task/<taskId>",
            "method": "put",
            "args": ["taskId"],
            "input": "v1/create-task-request.json#",
            "stability": "stable"
        }))
        .unwrap();

        let Entry::Function(function) = entry else {
            panic!("expected function entry");
        };
        assert_eq!(function.name, "createTask");
        assert_eq!(function.args, vec!["taskId"]);
        assert_eq!(function.input.as_deref(), Some("v1/create-task-request.json#"));
        assert!(function.output.is_none());
        assert!(function.query.is_none());
    }

    #[test]
    fn function_entry_args_default_to_empty() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "function",
            "name": "ping",
            "route": "/ping",
            "method": "get"
        }))
        .unwrap();

        assert_eq!(entry.name(), Some("ping"));
        assert_eq!(entry.kind(), "function");
        match entry {
            Entry::Function(function) => assert!(function.args.is_empty()),
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn empty_query_is_distinct_from_absent_query() {
        let entry: FunctionEntry = serde_json::from_value(json!({
            "name": "listThings",
            "route": "/things",
            "method": "get",
            "query": []
        }))
        .unwrap();

        assert_eq!(entry.query, Some(vec![]));
    }

    #[test]
    fn topic_exchange_preserves_routing_key_order() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "topic-exchange",
            "name": "taskDefined",
            "exchange": "task-defined",
            "routingKey": [
                { "name": "routingKeyKind", "constant": "primary" },
                { "name": "taskId", "required": true },
                { "name": "reserved", "multipleWords": true }
            ]
        }))
        .unwrap();

        let Entry::TopicExchange(exchange) = entry else {
            panic!("expected topic-exchange entry");
        };
        let names: Vec<_> = exchange.routing_key.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["routingKeyKind", "taskId", "reserved"]);
        assert!(exchange.routing_key[1].is_required());
        assert_eq!(exchange.routing_key[2].field("multipleWords"), Some(json!(true)));
    }

    #[test]
    fn unknown_entry_type_is_unrecognized() {
        let entry: Entry = serde_json::from_value(json!({
            "type": "websocket",
            "name": "stream"
        }))
        .unwrap();

        assert_eq!(entry, Entry::Unrecognized);
        assert_eq!(entry.kind(), "unrecognized");
    }

    #[test]
    fn routing_key_required_false_is_kept() {
        let part: RoutingKeyPart =
            serde_json::from_value(json!({ "name": "runId", "required": false })).unwrap();

        assert_eq!(part.field("required"), Some(json!(false)));
        assert_eq!(part.field("summary"), None);
    }

    #[test]
    fn service_spec_filters_entries_by_kind() {
        let spec: ServiceSpec = serde_json::from_value(json!({
            "baseUrl": "https://queue.example.com/v1/",
            "entries": [
                { "type": "function", "name": "ping", "route": "/ping", "method": "get" },
                { "type": "topic-exchange", "name": "taskDefined", "exchange": "task-defined" },
                { "type": "future-kind", "name": "later" }
            ]
        }))
        .unwrap();

        assert_eq!(spec.base_url.as_deref(), Some("https://queue.example.com/v1/"));
        assert!(spec.exchange_prefix.is_none());
        assert_eq!(spec.functions().count(), 1);
        assert_eq!(spec.topic_exchanges().count(), 1);
        assert_eq!(spec.entries.len(), 3);
    }

    #[test]
    fn definition_iterates_services_sorted() {
        let definition: ApiDefinition = serde_json::from_value(json!({
            "Queue": { "reference": { "entries": [] } },
            "Auth": { "reference": { "entries": [] } },
            "Index": { "reference": { "entries": [] } }
        }))
        .unwrap();

        let names: Vec<_> = definition.names().collect();
        assert_eq!(names, vec!["Auth", "Index", "Queue"]);
    }
}

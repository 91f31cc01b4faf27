//! Metadata records embedded in generated clients.
//!
//! These are the only shapes of data the generator writes into Python source.
//! Each has a fixed key order, and optional keys are omitted rather than
//! emitted as `None`.

use pyclient_define::{FunctionEntry, TopicExchangeEntry};
use serde_json::Value;

use crate::literal::{PyValue, ToPyLiteral};
use crate::transcode::{angles_to_braces, filter_routing_key};

/// Call-time metadata for one function, keyed by name in `funcinfo`.
///
/// ## Examples
///
/// ```
/// use pyclient_define::FunctionEntry;
/// use pyclient_gen::literal::ToPyLiteral;
/// use pyclient_gen::records::FunctionInfo;
///
/// let entry = FunctionEntry {
///     name: "task".to_string(),
///     route: "/task/<taskId>".to_string(),
///     method: "get".to_string(),
///     args: vec!["taskId".to_string()],
///     ..Default::default()
/// };
///
/// let info = FunctionInfo::from_entry(&entry);
/// assert_eq!(info.route, "/task/{taskId}");
/// assert_eq!(
///     info.to_literal().render(0),
///     "{\n    'args': ['taskId'],\n    'name': 'task',\n    'route': '/task/{taskId}',\n    'method': 'get',\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub args: Vec<String>,
    pub name: String,
    /// Route with `{name}` placeholders.
    pub route: String,
    pub method: String,
    pub stability: Option<String>,
    pub query: Option<Vec<String>>,
    pub input: Option<String>,
    pub output: Option<String>,
}

impl FunctionInfo {
    pub fn from_entry(entry: &FunctionEntry) -> Self {
        Self {
            args: entry.args.clone(),
            name: entry.name.clone(),
            route: angles_to_braces(Some(&entry.route)).unwrap_or_default(),
            method: entry.method.clone(),
            stability: entry.stability.clone(),
            query: entry.query.clone(),
            input: entry.input.clone(),
            output: entry.output.clone(),
        }
    }
}

impl ToPyLiteral for FunctionInfo {
    fn to_literal(&self) -> PyValue {
        let mut pairs = vec![
            ("args".to_string(), PyValue::str_list(self.args.iter().cloned())),
            ("name".to_string(), PyValue::str(&self.name)),
            ("route".to_string(), PyValue::str(&self.route)),
            ("method".to_string(), PyValue::str(&self.method)),
        ];
        if let Some(stability) = &self.stability {
            pairs.push(("stability".to_string(), PyValue::str(stability)));
        }
        if let Some(query) = &self.query {
            pairs.push(("query".to_string(), PyValue::str_list(query.iter().cloned())));
        }
        if let Some(input) = &self.input {
            pairs.push(("input".to_string(), PyValue::str(input)));
        }
        if let Some(output) = &self.output {
            pairs.push(("output".to_string(), PyValue::str(output)));
        }
        PyValue::Dict(pairs)
    }
}

/// A routing-key part reduced to allow-listed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingKeyLiteral {
    /// Field name and source value, in allow-list order.
    pub fields: Vec<(String, Value)>,
}

impl RoutingKeyLiteral {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }
}

impl ToPyLiteral for RoutingKeyLiteral {
    fn to_literal(&self) -> PyValue {
        PyValue::Dict(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), PyValue::from_json(value)))
                .collect(),
        )
    }
}

/// The exchange reference passed to the topic-exchange dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRef {
    pub exchange: String,
    pub name: String,
    pub routing_key: Vec<RoutingKeyLiteral>,
    pub schema: Option<String>,
}

impl ExchangeRef {
    pub fn from_entry(entry: &TopicExchangeEntry, allow_list: &[String]) -> Self {
        Self {
            exchange: entry.exchange.clone(),
            name: entry.name.clone(),
            routing_key: entry
                .routing_key
                .iter()
                .map(|part| filter_routing_key(part, allow_list))
                .collect(),
            schema: entry.schema.clone(),
        }
    }
}

impl ToPyLiteral for ExchangeRef {
    fn to_literal(&self) -> PyValue {
        let mut pairs = vec![
            ("exchange".to_string(), PyValue::str(&self.exchange)),
            ("name".to_string(), PyValue::str(&self.name)),
            (
                "routingKey".to_string(),
                PyValue::List(self.routing_key.iter().map(RoutingKeyLiteral::to_literal).collect()),
            ),
        ];
        if let Some(schema) = &self.schema {
            pairs.push(("schema".to_string(), PyValue::str(schema)));
        }
        PyValue::Dict(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyclient_define::RoutingKeyPart;

    fn keys(value: &PyValue) -> Vec<&str> {
        match value {
            PyValue::Dict(pairs) => pairs.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected dict, got {:?}", other),
        }
    }

    #[test]
    fn function_info_omits_absent_optional_keys() {
        let entry = FunctionEntry {
            name: "ping".into(),
            route: "/ping".into(),
            method: "get".into(),
            ..Default::default()
        };
        let literal = FunctionInfo::from_entry(&entry).to_literal();
        assert_eq!(keys(&literal), vec!["args", "name", "route", "method"]);
        assert!(!literal.render(0).contains("None"));
    }

    #[test]
    fn function_info_includes_present_optional_keys_in_order() {
        let entry = FunctionEntry {
            name: "listTasks".into(),
            route: "/tasks/<taskGroupId>".into(),
            method: "get".into(),
            args: vec!["taskGroupId".into()],
            query: Some(vec!["continuationToken".into(), "limit".into()]),
            input: Some("v1/in.json#".into()),
            output: Some("v1/out.json#".into()),
            stability: Some("stable".into()),
            ..Default::default()
        };
        let literal = FunctionInfo::from_entry(&entry).to_literal();
        assert_eq!(
            keys(&literal),
            vec!["args", "name", "route", "method", "stability", "query", "input", "output"]
        );
    }

    #[test]
    fn empty_query_is_still_emitted() {
        let entry = FunctionEntry {
            name: "list".into(),
            route: "/list".into(),
            method: "get".into(),
            query: Some(vec![]),
            ..Default::default()
        };
        let rendered = FunctionInfo::from_entry(&entry).to_literal().render(0);
        assert!(rendered.contains("'query': [],"));
    }

    #[test]
    fn exchange_ref_includes_schema_only_when_present() {
        let mut entry = TopicExchangeEntry {
            name: "taskDefined".into(),
            exchange: "task-defined".into(),
            routing_key: vec![RoutingKeyPart {
                name: "taskId".into(),
                required: Some(true),
                ..Default::default()
            }],
            ..Default::default()
        };
        let allow_list: Vec<String> = vec!["name".into(), "required".into()];

        let without = ExchangeRef::from_entry(&entry, &allow_list).to_literal();
        assert_eq!(keys(&without), vec!["exchange", "name", "routingKey"]);

        entry.schema = Some("v1/task-defined-message.json#".into());
        let with = ExchangeRef::from_entry(&entry, &allow_list).to_literal();
        assert_eq!(keys(&with), vec!["exchange", "name", "routingKey", "schema"]);
    }
}

//! Route template rewriting and routing-key filtering.
//!
//! Definition routes mark placeholders with angle brackets (`/task/<taskId>`),
//! while the generated client formats routes with `str.format`-style braces
//! (`/task/{taskId}`).

use std::sync::LazyLock;

use pyclient_define::{RoutingKeyPart, ServiceSpec};
use regex::Regex;

use crate::literal::{PyValue, ToPyLiteral};
use crate::records::RoutingKeyLiteral;

static ANGLE_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.*?)>").expect("Invalid angle placeholder regex"));

static BRACE_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("Invalid brace placeholder regex"));

/// Rewrites `<name>` placeholders to `{name}`.
///
/// Returns `None` when there is no route to rewrite.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::transcode::angles_to_braces;
///
/// assert_eq!(
///     angles_to_braces(Some("/task/<taskId>/runs/<runId>")).as_deref(),
///     Some("/task/{taskId}/runs/{runId}")
/// );
/// assert_eq!(angles_to_braces(None), None);
/// ```
pub fn angles_to_braces(route: Option<&str>) -> Option<String> {
    route.map(|r| ANGLE_PLACEHOLDER_RE.replace_all(r, "{$1}").into_owned())
}

/// Rewrites `{name}` placeholders back to `<name>`.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::transcode::{angles_to_braces, braces_to_angles};
///
/// let route = "/task/<taskId>/artifacts/<name>";
/// let braces = angles_to_braces(Some(route));
/// assert_eq!(braces_to_angles(braces.as_deref()).as_deref(), Some(route));
/// ```
pub fn braces_to_angles(route: Option<&str>) -> Option<String> {
    route.map(|r| BRACE_PLACEHOLDER_RE.replace_all(r, "<$1>").into_owned())
}

/// Keeps only the allow-listed fields of a routing-key part.
///
/// Fields are emitted in allow-list order; fields the part does not declare
/// are skipped rather than emitted as empty values.
pub fn filter_routing_key(part: &RoutingKeyPart, allow_list: &[String]) -> RoutingKeyLiteral {
    RoutingKeyLiteral {
        fields: allow_list
            .iter()
            .filter_map(|key| part.field(key).map(|value| (key.clone(), value)))
            .collect(),
    }
}

/// Builds the `routingKeys` table: exchange name to filtered routing-key parts.
pub fn routing_keys_table(spec: &ServiceSpec, allow_list: &[String]) -> PyValue {
    PyValue::Dict(
        spec.topic_exchanges()
            .map(|exchange| {
                let parts = exchange
                    .routing_key
                    .iter()
                    .map(|part| filter_routing_key(part, allow_list).to_literal())
                    .collect();
                (exchange.name.clone(), PyValue::List(parts))
            })
            .collect(),
    )
}

/// Builds the `routes` table: function name to brace-style route.
pub fn routes_table(spec: &ServiceSpec) -> PyValue {
    PyValue::Dict(
        spec.functions()
            .map(|function| {
                let route = angles_to_braces(Some(&function.route)).unwrap_or_default();
                (function.name.clone(), PyValue::Str(route))
            })
            .collect(),
    )
}

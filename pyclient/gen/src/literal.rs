//! Deterministic Python literal emission.
//!
//! Metadata embedded in generated clients is built as a [`PyValue`] tree and
//! rendered by a single fixed printer, so identical input always yields
//! byte-identical source. Records that end up in generated code implement
//! [`ToPyLiteral`].
//!
//! ## Layout
//!
//! - Strings use single quotes with Python escapes
//! - Dicts always span multiple lines, one key per line, with trailing commas
//! - Lists stay on one line when every item is a scalar
//! - Nesting adds four spaces

use std::fmt::Write;

use serde_json::Value;

const NEST: usize = 4;

/// A Python literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum PyValue {
    None,
    Bool(bool),
    /// Numeric literal text, emitted verbatim.
    Number(String),
    Str(String),
    List(Vec<PyValue>),
    /// Key/value pairs in emission order.
    Dict(Vec<(String, PyValue)>),
}

/// Conversion of a record into its literal representation.
pub trait ToPyLiteral {
    fn to_literal(&self) -> PyValue;
}

impl PyValue {
    pub fn str(value: impl Into<String>) -> Self {
        PyValue::Str(value.into())
    }

    /// A list of string literals.
    pub fn str_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PyValue::List(items.into_iter().map(|s| PyValue::Str(s.into())).collect())
    }

    /// Converts arbitrary JSON into a literal, keeping object key order.
    ///
    /// ## Examples
    ///
    /// ```
    /// use pyclient_gen::literal::PyValue;
    /// use serde_json::json;
    ///
    /// assert_eq!(PyValue::from_json(&json!(true)).render(0), "True");
    /// assert_eq!(PyValue::from_json(&json!(3)).render(0), "3");
    /// assert_eq!(PyValue::from_json(&json!(null)).render(0), "None");
    /// assert_eq!(PyValue::from_json(&json!("it's")).render(0), r"'it\'s'");
    /// ```
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => PyValue::None,
            Value::Bool(b) => PyValue::Bool(*b),
            Value::Number(n) => PyValue::Number(n.to_string()),
            Value::String(s) => PyValue::Str(s.clone()),
            Value::Array(items) => PyValue::List(items.iter().map(PyValue::from_json).collect()),
            Value::Object(map) => PyValue::Dict(
                map.iter()
                    .map(|(k, v)| (k.clone(), PyValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    fn is_scalar(&self) -> bool {
        !matches!(self, PyValue::List(_) | PyValue::Dict(_))
    }

    /// Renders the literal as it appears when its first character sits at
    /// column `indent`.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, indent);
        out
    }

    fn write_to(&self, out: &mut String, indent: usize) {
        match self {
            PyValue::None => out.push_str("None"),
            PyValue::Bool(true) => out.push_str("True"),
            PyValue::Bool(false) => out.push_str("False"),
            PyValue::Number(n) => out.push_str(n),
            PyValue::Str(s) => out.push_str(&quote(s)),
            PyValue::List(items) if items.is_empty() => out.push_str("[]"),
            PyValue::List(items) if items.iter().all(PyValue::is_scalar) => {
                out.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    item.write_to(out, indent);
                }
                out.push(']');
            }
            PyValue::List(items) => {
                out.push_str("[\n");
                for item in items {
                    pad(out, indent + NEST);
                    item.write_to(out, indent + NEST);
                    out.push_str(",\n");
                }
                pad(out, indent);
                out.push(']');
            }
            PyValue::Dict(pairs) if pairs.is_empty() => out.push_str("{}"),
            PyValue::Dict(pairs) => {
                out.push_str("{\n");
                for (key, value) in pairs {
                    pad(out, indent + NEST);
                    let _ = write!(out, "{}: ", quote(key));
                    value.write_to(out, indent + NEST);
                    out.push_str(",\n");
                }
                pad(out, indent);
                out.push('}');
            }
        }
    }
}

fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}

/// Quotes a string as a single-quoted Python literal.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::literal::quote;
///
/// assert_eq!(quote("/task/{taskId}"), "'/task/{taskId}'");
/// assert_eq!(quote("a'b\\c\n"), r"'a\'b\\c\n'");
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

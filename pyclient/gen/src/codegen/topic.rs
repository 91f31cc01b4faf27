//! Method generation for topic-exchange entries.
//!
//! Unlike functions, a topic exchange carries its metadata inline: the method
//! builds a `ref` literal and hands it to `BaseClient._makeTopicExchange`.

use pyclient_define::TopicExchangeEntry;

use super::{BODY_INDENT, METHOD_INDENT, docstring_block, join_paragraphs};
use crate::literal::ToPyLiteral;
use crate::records::ExchangeRef;

/// Assembles the docstring text of a topic exchange, if it has any.
///
/// Paragraphs, in order: title, description, schema, stability, then the
/// routing-key parts in declaration order.
///
/// ## Examples
///
/// ```
/// use pyclient_define::{RoutingKeyPart, TopicExchangeEntry};
/// use pyclient_gen::codegen::topic_docstring;
///
/// let entry = TopicExchangeEntry {
///     name: "taskDefined".to_string(),
///     exchange: "task-defined".to_string(),
///     routing_key: vec![RoutingKeyPart {
///         name: "taskId".to_string(),
///         required: Some(true),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// assert_eq!(
///     topic_docstring(&entry).unwrap(),
///     "This exchange takes the following keys:\n\n * taskId:  (required)"
/// );
/// ```
pub fn topic_docstring(entry: &TopicExchangeEntry) -> Option<String> {
    let mut paragraphs = Vec::new();
    paragraphs.extend(entry.title.clone());
    paragraphs.extend(entry.description.clone());
    if let Some(schema) = &entry.schema {
        paragraphs.push(format!("This exchange outputs: ``{}``", schema));
    }
    if let Some(stability) = &entry.stability {
        paragraphs.push(format!("This exchange is ``{}``", stability));
    }

    let mut text = join_paragraphs(paragraphs);
    if !entry.routing_key.is_empty() {
        let keys: Vec<String> = entry
            .routing_key
            .iter()
            .map(|part| {
                format!(
                    " * {}: {}{}",
                    part.name,
                    part.summary.as_deref().unwrap_or_default(),
                    if part.is_required() { " (required)" } else { "" }
                )
            })
            .collect();
        let listing = format!(
            "This exchange takes the following keys:\n\n{}",
            keys.join("\n\n")
        );
        text = Some(match text {
            Some(head) => format!("{}\n\n{}", head, listing),
            None => listing,
        });
    }
    text
}

/// Renders the complete method for a topic-exchange entry.
///
/// `allow_list` selects the routing-key fields carried into the `ref` literal.
pub fn render_topic_method(entry: &TopicExchangeEntry, allow_list: &[String], width: usize) -> String {
    let method_pad = " ".repeat(METHOD_INDENT);
    let body_pad = " ".repeat(BODY_INDENT);

    let mut out = format!("{method_pad}def {}(self, *args, **kwargs):\n", entry.name);

    if let Some(doc) = topic_docstring(entry) {
        out.push_str(&docstring_block(&doc, BODY_INDENT, width));
        out.push('\n');
    }

    let reference = ExchangeRef::from_entry(entry, allow_list);
    out.push_str(&format!(
        "{body_pad}ref = {}\n",
        reference.to_literal().render(BODY_INDENT)
    ));
    out.push_str(&format!(
        "{body_pad}return self._makeTopicExchange(ref, *args, **kwargs)\n"
    ));
    out
}

//! Method generation for HTTP function entries.
//!
//! Each function becomes a thin method that forwards its arguments to
//! `BaseClient._makeApiCall` together with the function's `funcinfo` record.

use pyclient_define::FunctionEntry;

use super::{BODY_INDENT, METHOD_INDENT, docstring_block, join_paragraphs};

/// Assembles the docstring text of a function, if it has any.
///
/// Paragraphs, in order: title, description, input schema, output schema,
/// stability.
///
/// ## Examples
///
/// ```
/// use pyclient_define::FunctionEntry;
/// use pyclient_gen::codegen::function_docstring;
///
/// let entry = FunctionEntry {
///     name: "ping".to_string(),
///     title: Some("Ping Server".to_string()),
///     description: Some("Respond without doing anything.".to_string()),
///     stability: Some("stable".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     function_docstring(&entry).unwrap(),
///     "Ping Server\n\nRespond without doing anything.\n\nThis method is ``stable``"
/// );
/// ```
pub fn function_docstring(entry: &FunctionEntry) -> Option<String> {
    let mut paragraphs = Vec::new();
    paragraphs.extend(entry.title.clone());
    paragraphs.extend(entry.description.clone());
    if let Some(input) = &entry.input {
        paragraphs.push(format!("This method takes input: ``{}``", input));
    }
    if let Some(output) = &entry.output {
        paragraphs.push(format!("This method gives output: ``{}``", output));
    }
    if let Some(stability) = &entry.stability {
        paragraphs.push(format!("This method is ``{}``", stability));
    }
    join_paragraphs(paragraphs)
}

/// Whether the method accepts an `options` keyword for query parameters.
pub fn takes_options(entry: &FunctionEntry) -> bool {
    entry.query.as_ref().is_some_and(|query| !query.is_empty())
}

/// Parameter list of the generated method, starting with `self`.
///
/// ## Examples
///
/// ```
/// use pyclient_define::FunctionEntry;
/// use pyclient_gen::codegen::function::method_parameters;
///
/// let entry = FunctionEntry {
///     name: "createTask".to_string(),
///     args: vec!["taskId".to_string()],
///     input: Some("v1/create-task-request.json#".to_string()),
///     query: Some(vec!["dryRun".to_string()]),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     method_parameters(&entry),
///     vec!["self", "taskId", "payload", "options=None"]
/// );
/// ```
pub fn method_parameters(entry: &FunctionEntry) -> Vec<String> {
    let mut params = vec!["self".to_string()];
    params.extend(entry.args.iter().cloned());
    if entry.input.is_some() {
        params.push("payload".to_string());
    }
    if takes_options(entry) {
        params.push("options=None".to_string());
    }
    params
}

/// Arguments forwarded to `_makeApiCall` after the `funcinfo` record.
pub fn forwarded_arguments(entry: &FunctionEntry) -> Vec<String> {
    let mut args: Vec<String> = entry.args.clone();
    if entry.input.is_some() {
        args.push("payload".to_string());
    }
    if takes_options(entry) {
        args.push("options=options".to_string());
    }
    args
}

/// Renders the complete method for a function entry.
///
/// ## Examples
///
/// ```
/// use pyclient_define::FunctionEntry;
/// use pyclient_gen::codegen::render_function_method;
///
/// let entry = FunctionEntry {
///     name: "task".to_string(),
///     route: "/task/<taskId>".to_string(),
///     method: "get".to_string(),
///     args: vec!["taskId".to_string()],
///     ..Default::default()
/// };
///
/// assert_eq!(
///     render_function_method(&entry, 100),
///     "    def task(self, taskId):\n        return self._makeApiCall(self.funcinfo['task'], taskId)\n"
/// );
/// ```
pub fn render_function_method(entry: &FunctionEntry, width: usize) -> String {
    let method_pad = " ".repeat(METHOD_INDENT);
    let body_pad = " ".repeat(BODY_INDENT);

    let mut out = format!(
        "{method_pad}def {}({}):\n",
        entry.name,
        method_parameters(entry).join(", ")
    );

    if let Some(doc) = function_docstring(entry) {
        out.push_str(&docstring_block(&doc, BODY_INDENT, width));
        out.push('\n');
    }

    let mut call_args = vec![format!("self.funcinfo['{}']", entry.name)];
    call_args.extend(forwarded_arguments(entry));
    out.push_str(&format!(
        "{body_pad}return self._makeApiCall({})\n",
        call_args.join(", ")
    ));
    out
}

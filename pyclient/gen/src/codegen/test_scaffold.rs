//! Test scaffold generation.
//!
//! Each service gets a `unittest` module that patches the client's dispatch
//! methods and checks that every generated method forwards to them with the
//! right metadata. The scaffold never performs real API calls.

use pyclient_define::{Entry, FunctionEntry, ServiceDefinition, TopicExchangeEntry};

use super::function::takes_options;
use super::{GENERATED_MARKER, client::validate_service};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::literal::quote;

/// Placeholder call arguments for a function: each parameter name quoted.
///
/// ## Examples
///
/// ```
/// use pyclient_define::FunctionEntry;
/// use pyclient_gen::codegen::test_scaffold::placeholder_arguments;
///
/// let entry = FunctionEntry {
///     args: vec!["taskId".to_string()],
///     input: Some("v1/in.json#".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(placeholder_arguments(&entry), vec!["'taskId'", "'payload'"]);
/// ```
pub fn placeholder_arguments(entry: &FunctionEntry) -> Vec<String> {
    let mut args: Vec<String> = entry.args.iter().map(|arg| quote(arg)).collect();
    if entry.input.is_some() {
        args.push(quote("payload"));
    }
    args
}

/// Renders the test module for one service.
///
/// ## Errors
///
/// Returns `GeneratorError::Render` under the same conditions as
/// [`render_client`](super::render_client).
pub fn render_test_module(
    service: &str,
    definition: &ServiceDefinition,
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    validate_service(service, definition)?;

    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    out.push_str("# coding=utf-8\n");
    out.push_str("import unittest\n\nimport mock\n\n");
    out.push_str(&format!(
        "from {}.{} import {}\n\n\n",
        config.package, service, service
    ));
    out.push_str(&format!("class Test{}(unittest.TestCase):\n\n", service));
    out.push_str("    def setUp(self):\n");
    out.push_str(&format!("        self.client = {}()\n\n", service));
    out.push_str("    def test_client_constructs(self):\n");
    out.push_str(&format!(
        "        self.assertIsInstance(self.client, {})\n",
        service
    ));

    for entry in &definition.reference.entries {
        let test = match entry {
            Entry::Function(function) => function_test(service, function),
            Entry::TopicExchange(exchange) => topic_test(exchange),
            Entry::Unrecognized => continue,
        };
        out.push('\n');
        out.push_str(&test);
    }

    out.push_str("\n\nif __name__ == '__main__':\n    unittest.main()\n");
    Ok(out)
}

fn function_test(service: &str, entry: &FunctionEntry) -> String {
    let args = placeholder_arguments(entry);

    let mut expected = vec![format!("{}.funcinfo[{}]", service, quote(&entry.name))];
    expected.extend(args.iter().cloned());
    if takes_options(entry) {
        expected.push("options=None".to_string());
    }

    format!(
        "    def test_{name}(self):\n\
         \x20       with mock.patch.object(self.client, '_makeApiCall') as call:\n\
         \x20           self.client.{name}({args})\n\
         \x20           call.assert_called_once_with({expected})\n",
        name = entry.name,
        args = args.join(", "),
        expected = expected.join(", "),
    )
}

fn topic_test(entry: &TopicExchangeEntry) -> String {
    format!(
        "    def test_{name}(self):\n\
         \x20       with mock.patch.object(self.client, '_makeTopicExchange') as call:\n\
         \x20           self.client.{name}()\n\
         \x20           ref = call.call_args[0][0]\n\
         \x20           self.assertEqual(ref['exchange'], {exchange})\n\
         \x20           self.assertEqual(ref['name'], {quoted_name})\n",
        name = entry.name,
        exchange = quote(&entry.exchange),
        quoted_name = quote(&entry.name),
    )
}

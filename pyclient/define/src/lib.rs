//! Pyclient Definition Library
//!
//! Types and loading for the JSON API definitions consumed by `pyclient-gen`.
//! A definition maps service names to a reference block listing the service's
//! callable entries.
//!
//! ## Core Types
//!
//! - [`ApiDefinition`] - All services of a definition file, sorted by name
//! - [`ServiceDefinition`] - One service: its reference and reference URL
//! - [`ServiceSpec`] - Base URL, exchange prefix, description, and entries
//! - [`Entry`] - A function, a topic exchange, or an unrecognized entry kind
//! - [`FunctionEntry`] - An HTTP call with a route template
//! - [`TopicExchangeEntry`] - A pub/sub exchange with an ordered routing key
//! - [`RoutingKeyPart`] - One positional part of a routing key
//!
//! ## Examples
//!
//! ```
//! use pyclient_define::{Entry, parse_definition};
//!
//! let json = r#"{
//!     "Queue": {
//!         "reference": {
//!             "baseUrl": "https://queue.example.com/v1/",
//!             "entries": [
//!                 {
//!                     "type": "function",
//!                     "name": "task",
//!                     "route": "/task/<taskId>",
//!                     "method": "get",
//!                     "args": ["taskId"]
//!                 }
//!             ]
//!         },
//!         "referenceUrl": "https://queue.example.com/v1/api.json"
//!     }
//! }"#;
//!
//! let definition = parse_definition(json).unwrap();
//! let queue = definition.get("Queue").unwrap();
//! match &queue.reference.entries[0] {
//!     Entry::Function(function) => assert_eq!(function.route, "/task/<taskId>"),
//!     other => panic!("unexpected entry {:?}", other),
//! }
//! ```

mod error;
mod loader;
mod types;

pub use error::DefinitionError;
pub use loader::{DEFAULT_DEFINITION_PATH, DEFINITION_PATH_ENV, load_definition, parse_definition};
pub use types::{
    ApiDefinition, Entry, FunctionEntry, RoutingKeyPart, ServiceDefinition, ServiceSpec,
    TopicExchangeEntry,
};

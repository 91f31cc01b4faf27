//! Shared test utilities for pyclient-gen tests.

use pyclient_define::{
    ApiDefinition, Entry, FunctionEntry, ServiceDefinition, ServiceSpec, TopicExchangeEntry,
};

/// Creates a function entry with a `get` method.
pub fn function(name: &str, route: &str, args: &[&str]) -> Entry {
    Entry::Function(FunctionEntry {
        name: name.to_string(),
        route: route.to_string(),
        method: "get".to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    })
}

/// Creates a topic-exchange entry without routing key.
pub fn topic(name: &str, exchange: &str) -> Entry {
    Entry::TopicExchange(TopicExchangeEntry {
        name: name.to_string(),
        exchange: exchange.to_string(),
        ..Default::default()
    })
}

/// Creates a service definition holding `entries`.
pub fn service(entries: Vec<Entry>) -> ServiceDefinition {
    ServiceDefinition {
        reference: ServiceSpec {
            entries,
            ..Default::default()
        },
        reference_url: None,
    }
}

/// Creates an API definition from named services.
pub fn definition_of(services: Vec<(&str, ServiceDefinition)>) -> ApiDefinition {
    ApiDefinition::from_services(services)
}

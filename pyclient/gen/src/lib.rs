//! Pyclient code generator library.
//!
//! This crate generates typed Python client modules from JSON API definitions
//! loaded with `pyclient-define`. For every service in the definition it
//! produces:
//!
//! - A client class deriving from the hand-written `BaseClient`, with one
//!   method per function and per topic exchange
//! - A `funcinfo` table holding the call-time metadata of each function
//! - A `unittest` scaffold exercising every generated method
//!
//! After all services are rendered, a package `__init__.py` re-exports every
//! client and a manifest lists every written path.
//!
//! ## Modules
//!
//! - [`codegen`] - Rendering of methods, client modules, test scaffolds, and the index
//! - [`config`] - Output locations, module paths, wrap width, routing-key allow-list
//! - [`docstring`] - Escaping and wrapping of free-text descriptions
//! - [`transcode`] - Route placeholder rewriting and routing-key filtering
//! - [`literal`] - Deterministic Python literal emission
//! - [`records`] - The metadata records embedded in generated code
//! - [`output`] - Planning, atomic writing, and the top-level entry points
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use pyclient_gen::config::GeneratorConfig;
//! use pyclient_gen::output::generate_from_path;
//!
//! let config = GeneratorConfig::default();
//! let report = generate_from_path(Path::new("taskcluster/apis.json"), &config, false).unwrap();
//! println!("wrote {} files", report.written.len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For a service `Queue` with a function `task` routed at `/task/<taskId>`:
//!
//! ```text
//! class Queue(BaseClient):
//!     classOptions = {}
//!
//!     def task(self, taskId):
//!         return self._makeApiCall(self.funcinfo['task'], taskId)
//!
//!     funcinfo = {
//!         'task': {
//!             'args': ['taskId'],
//!             'name': 'task',
//!             'route': '/task/{taskId}',
//!             'method': 'get',
//!         },
//!     }
//! ```

pub mod codegen;
pub mod config;
pub mod docstring;
pub mod errors;
pub mod literal;
pub mod output;
pub mod records;
pub mod transcode;

#[cfg(test)]
pub(crate) mod test_utils;

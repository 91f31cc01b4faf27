//! Package index and manifest generation.

use std::path::Path;

use super::GENERATED_MARKER;

/// Renders the package `__init__.py` re-exporting every client class.
///
/// Services are listed in sorted order regardless of input order.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::codegen::render_index;
///
/// let index = render_index(&["Queue", "Auth"], "taskcluster.sync");
/// assert_eq!(
///     index,
///     "# This file is generated!  Do not edit!\n\
///      from taskcluster.sync.Auth import Auth\n\
///      from taskcluster.sync.Queue import Queue\n\
///      __all__ = [\n    'Auth',\n    'Queue',\n]\n"
/// );
/// ```
pub fn render_index<S: AsRef<str>>(services: &[S], package: &str) -> String {
    let mut names: Vec<&str> = services.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();

    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    for name in &names {
        out.push_str(&format!("from {}.{} import {}\n", package, name, name));
    }
    out.push_str("__all__ = [\n");
    for name in &names {
        out.push_str(&format!("    '{}',\n", name));
    }
    out.push_str("]\n");
    out
}

/// Renders the manifest listing every path written by a run, in write order.
///
/// ## Examples
///
/// ```
/// use std::path::PathBuf;
/// use pyclient_gen::codegen::render_manifest;
///
/// let paths = vec![PathBuf::from("taskcluster/sync/Queue.py"), PathBuf::from("test/testQueue.py")];
/// assert_eq!(
///     render_manifest(&paths),
///     "# This file is generated!  Do not edit!\ntaskcluster/sync/Queue.py\ntest/testQueue.py\n"
/// );
/// ```
pub fn render_manifest<P: AsRef<Path>>(paths: &[P]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    for path in paths {
        out.push_str(&path.as_ref().display().to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_still_declares_all() {
        let index = render_index::<&str>(&[], "taskcluster.sync");
        assert_eq!(index, format!("{}\n__all__ = [\n]\n", GENERATED_MARKER));
    }

    #[test]
    fn index_order_ignores_input_order() {
        let a = render_index(&["Queue", "Auth", "Index"], "pkg");
        let b = render_index(&["Index", "Queue", "Auth"], "pkg");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_manifest_is_only_marker() {
        let manifest = render_manifest::<&str>(&[]);
        assert_eq!(manifest, format!("{}\n", GENERATED_MARKER));
    }
}

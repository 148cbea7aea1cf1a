//! Schema path helpers.
//!
//! Paths arrive from the toolchain fully qualified, one `prefix:name` pair
//! per component (`/oc-if:interfaces/oc-if:interface/oc-if:name`).

/// Removes namespace prefixes from every component of a schema path.
///
/// `/oc-if:interfaces/oc-if:interface` becomes `/interfaces/interface`.
/// Components without a prefix are kept as-is.
pub fn strip_namespace(path: &str) -> String {
    let stripped: Vec<&str> = path
        .split('/')
        .map(|component| match component.split_once(':') {
            Some((_, name)) => name,
            None => component,
        })
        .collect();
    stripped.join("/")
}

//! Scheme prefixes accepted on input.

/// Checked in this order; the first match is stripped.
pub const SUPPORTED_SCHEMAS: [&str; 4] = ["https://", "git+ssh://", "ssh://", "git://"];

/// Strip the first supported scheme prefix, if any.
///
/// SCP-like remotes (`git@host:path`) carry no scheme and come back unchanged.
pub fn strip_schema(url: &str) -> &str {
    SUPPORTED_SCHEMAS
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix))
        .unwrap_or(url)
}

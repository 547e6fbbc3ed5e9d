//! Git remote URL normalization.
//!
//! Turns HTTPS, `git+ssh://`, `ssh://`, `git://` and SCP-like (`user@host:path`)
//! remotes into `https://host/path`, optionally keeping embedded credentials.
//! Purely textual: no host validation, percent-decoding, or IPv6 support.

mod parts;
mod schema;

pub use parts::UrlParts;
pub use schema::{strip_schema, SUPPORTED_SCHEMAS};

use crate::error::NormalizeError;

const GIT_SUFFIX: &str = ".git";

/// Normalizes a Git remote URL into `https://` form.
///
/// With `public` set, any `user` / `user:pass` segment is dropped; otherwise it
/// is kept verbatim. One trailing `.git` is removed.
///
/// # Examples
///
/// - `normalize("git@github.com:org/repo.git", true)` → `"https://github.com/org/repo"`
/// - `normalize("git@github.com:org/repo.git", false)` → `"https://git@github.com/org/repo"`
pub fn normalize(url: &str, public: bool) -> Result<String, NormalizeError> {
    if url.is_empty() {
        return Err(NormalizeError::InvalidInput("cannot continue without a URL"));
    }

    let parts = UrlParts::parse(url);
    let https = parts.to_https(public);
    let normalized = trim_git_suffix(&https).to_owned();

    tracing::debug!(?parts, public, "normalized git remote url");
    Ok(normalized)
}

fn trim_git_suffix(url: &str) -> &str {
    url.strip_suffix(GIT_SUFFIX).unwrap_or(url)
}

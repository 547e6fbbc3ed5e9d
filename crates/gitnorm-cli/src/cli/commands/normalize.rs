//! `git-url-norm`: print the normalized form of one remote URL.

use anyhow::Result;
use gitnorm_core::url_norm;

/// Normalize `url` and print it. A missing URL is treated as empty.
pub fn run_normalize(url: Option<&str>, public: bool) -> Result<()> {
    let normalized = url_norm::normalize(url.unwrap_or_default(), public)?;
    println!("{normalized}");
    Ok(())
}

use super::schema::strip_schema;
use std::fmt;

/// A remote URL split into its credential segment and `host/path`.
#[derive(Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// `user` or `user:pass`, as written; `None` when there is no `@`
    /// or nothing precedes it.
    pub user_info: Option<String>,
    /// Host and path with any SCP `host:path` colon already turned into `/`.
    pub host_and_path: String,
}

// Credentials never reach log output.
impl fmt::Debug for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlParts")
            .field("user_info", &self.user_info.as_ref().map(|_| "<redacted>"))
            .field("host_and_path", &self.host_and_path)
            .finish()
    }
}

impl UrlParts {
    /// Strip the scheme, split off credentials at the first `@`, and rewrite
    /// an SCP-style `host:path` separator.
    pub fn parse(url: &str) -> Self {
        let rest = strip_schema(url);
        let (user_info, host_and_path) = match rest.split_once('@') {
            Some((user_info, host_and_path)) => (Some(user_info), host_and_path),
            None => (None, rest),
        };
        Self {
            user_info: user_info.filter(|u| !u.is_empty()).map(str::to_owned),
            host_and_path: scp_to_slash(host_and_path),
        }
    }

    /// Rebuild as `https://`, dropping credentials when `public` is set.
    pub fn to_https(&self, public: bool) -> String {
        match (&self.user_info, public) {
            (Some(user_info), false) => format!("https://{user_info}@{}", self.host_and_path),
            _ => format!("https://{}", self.host_and_path),
        }
    }
}

/// Replace the first `:` with `/` when no `/` precedes it.
///
/// Ports are not special-cased: `host:2222/x` becomes `host/2222/x`.
fn scp_to_slash(host_and_path: &str) -> String {
    match host_and_path.split_once(':') {
        Some((host, path)) if !host.contains('/') => format!("{host}/{path}"),
        _ => host_and_path.to_owned(),
    }
}

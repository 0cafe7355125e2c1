//! Canonical URL construction.

use crate::environment::{resolve_environment, ConfigProvider};

/// Path used when none is given
pub const DEFAULT_PATH: &str = "/";

/// Join `site_url` and `path` with exactly one slash between them.
///
/// One trailing slash is stripped from the base and a leading slash is
/// added to the path if missing. The result is not validated or encoded.
pub fn canonical_url(site_url: &str, path: &str) -> String {
    let base = site_url.strip_suffix('/').unwrap_or(site_url);
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Canonical URL for `path` (default `/`) under the resolved site URL.
pub fn get_canonical_url(provider: &dyn ConfigProvider, path: Option<&str>) -> String {
    let environment = resolve_environment(provider);
    environment.canonical_url(path.unwrap_or(DEFAULT_PATH))
}

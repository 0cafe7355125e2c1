//! Static asset serving.
//!
//! Assets live in the theme's static directory and are served under
//! `/static`. Browsers also request `/favicon.ico` and `/apple-touch-icon.png`
//! at the site root, so those two files are mapped there as well.

use std::path::{Path, PathBuf};

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::Response,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{ThemeConfig, CACHE_CONTROL_ERROR, CACHE_CONTROL_STATIC};

/// Root-level icon files, as `(route, file name in the static directory)`
pub const ROOT_ICONS: [(&str, &str); 2] = [
    ("/favicon.ico", "favicon.ico"),
    ("/apple-touch-icon.png", "apple-touch-icon.png"),
];

/// Serve files from the theme's static directory, handing misses to `not_found`.
///
/// A missing directory is logged but not fatal; every asset request then
/// reaches the fallback.
pub fn create_static_service<F>(theme: &ThemeConfig, not_found: F) -> ServeDir<F> {
    if !Path::new(&theme.static_dir).is_dir() {
        tracing::warn!(dir = %theme.static_dir, "Static directory not found");
    }
    ServeDir::new(&theme.static_dir).fallback(not_found)
}

/// Serve a single file from the theme's static directory.
pub fn create_static_file(theme: &ThemeConfig, file_name: &str) -> ServeFile {
    ServeFile::new(PathBuf::from(&theme.static_dir).join(file_name))
}

/// Long immutable caching for delivered assets only.
///
/// Misses and errors keep whatever Cache-Control the fallback set, or get the
/// short error TTL, so a CDN never pins a 404 for a day.
pub async fn static_cache_control(mut response: Response) -> Response {
    let status = response.status();
    let value = if status.is_success() || status == StatusCode::NOT_MODIFIED {
        CACHE_CONTROL_STATIC
    } else {
        CACHE_CONTROL_ERROR
    };
    response
        .headers_mut()
        .entry(CACHE_CONTROL)
        .or_insert(HeaderValue::from_static(value));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn response(status: StatusCode) -> Response {
        Response::builder()
            .status(status)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_success_gets_static_policy() {
        let response = static_cache_control(response(StatusCode::OK)).await;
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), CACHE_CONTROL_STATIC);
    }

    #[tokio::test]
    async fn test_not_modified_gets_static_policy() {
        let response = static_cache_control(response(StatusCode::NOT_MODIFIED)).await;
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), CACHE_CONTROL_STATIC);
    }

    #[tokio::test]
    async fn test_miss_gets_error_policy() {
        let response = static_cache_control(response(StatusCode::NOT_FOUND)).await;
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), CACHE_CONTROL_ERROR);
    }

    #[tokio::test]
    async fn test_existing_header_kept() {
        let mut original = response(StatusCode::NOT_FOUND);
        original
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let response = static_cache_control(original).await;
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    }

    #[test]
    fn test_static_file_path() {
        let theme = ThemeConfig {
            templates_dir: "templates".to_string(),
            static_dir: "/usr/share/voluntodo/static".to_string(),
        };
        // Only checks construction; serving is covered by the HTTP tests
        let _service = create_static_file(&theme, "favicon.ico");
    }
}

//! Handler errors and their HTML rendering.
//!
//! Failures are rendered as a generic error page. Internal details are
//! logged with the request ID and never shown to the visitor.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::io;

use crate::config::CACHE_CONTROL_ERROR;
use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// An [`AppError`] tagged with the request it occurred in.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: Option<RequestId>,
}

impl From<AppError> for AppErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

/// Attach the current request ID to a failing result.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|error| AppErrorResponse {
            error,
            request_id: Some(request_id.clone()),
        })
    }
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        match &self.request_id {
            Some(id) => tracing::error!(request_id = %id.0, error = %self.error, "Request failed"),
            None => tracing::error!(error = %self.error, "Request failed"),
        }

        let mut response = (status, Html(error_page())).into_response();
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_ERROR));
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        AppErrorResponse::from(self).into_response()
    }
}

/// Self-contained so it renders even when templates are broken.
fn error_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Something went wrong - VolunTodo</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <main class="fallback">
        <h1>Oops! Something went wrong</h1>
        <p>An unexpected error occurred</p>
        <a class="button" href="/">Try again</a>
    </main>
</body>
</html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_response_is_generic() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_ERROR
        );
    }

    #[test]
    fn test_error_page_hides_details() {
        let page = error_page();
        assert!(page.contains("Oops! Something went wrong"));
        assert!(page.contains("An unexpected error occurred"));
        assert!(page.contains(r#"href="/""#));
    }

    #[test]
    fn test_with_request_id() {
        let id = RequestId(Uuid::new_v4());
        let result: Result<(), AppError> = Err(AppError::Internal("boom".to_string()));
        let err = result.with_request_id(&id).unwrap_err();
        assert_eq!(err.request_id.unwrap().0, id.0);
        assert!(matches!(err.error, AppError::Internal(_)));
    }

    #[test]
    fn test_template_error_converts() {
        let err: AppError = tera::Error::msg("bad template").into();
        assert!(err.to_string().starts_with("Template rendering error"));
    }
}

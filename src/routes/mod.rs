//! HTTP route handlers.
//!
//! Each group of routes carries its own Cache-Control policy. The landing page
//! gets a moderate public cache, delivered static assets a long immutable one,
//! misses a short one, and the health probe is never cached.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod not_found;

use axum::{handler::Handler, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_NO_STORE};
use crate::http::static_files::{
    create_static_file, create_static_service, static_cache_control, ROOT_ICONS,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Static files - misses render the 404 page instead of an empty body
    let theme = &state.config.theme;
    let not_found_page = not_found::not_found.with_state(state.clone());
    let mut static_routes =
        Router::new().nest_service("/static", create_static_service(theme, not_found_page));
    for (route, file_name) in ROOT_ICONS {
        static_routes = static_routes.route_service(route, create_static_file(theme, file_name));
    }
    let static_routes = static_routes.layer(middleware::map_response(static_cache_control));

    let health_routes = Router::new()
        .route("/api/health", get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .merge(static_routes)
        .fallback(not_found::not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

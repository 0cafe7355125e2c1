//! Plain HTTP listener that permanently redirects every request to HTTPS.

use std::net::SocketAddr;

use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::any;
use axum::Router;
use axum_extra::extract::Host;

/// Runs in the background; failures are logged, not propagated.
pub fn spawn_redirect_server(http_port: u16, https_port: u16) {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], http_port));

        tracing::info!(http_port, https_port, "Starting HTTP->HTTPS redirect server");

        let app = Router::new().fallback(any(move |Host(host): Host, uri: Uri| async move {
            let target = https_url(&host, &uri, https_port);
            tracing::debug!(from = %uri, to = %target, "Redirecting HTTP to HTTPS");
            Redirect::permanent(&target)
        }));

        if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
            tracing::error!(error = %e, "HTTP redirect server failed");
        }
    });
}

/// HTTPS URL for `uri` on `host`, dropping any port from the host and
/// omitting the HTTPS port when it is 443.
fn https_url(host: &str, uri: &Uri, https_port: u16) -> String {
    let host = host.split(':').next().unwrap_or(host);
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    if https_port == 443 {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}:{}{}", host, https_port, path)
    }
}

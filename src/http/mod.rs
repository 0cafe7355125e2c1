//! HTTP server module with optional TLS.
//!
//! Two listener modes:
//! - **None**: Plain HTTP, for development or behind a TLS-terminating proxy
//! - **Manual**: HTTPS with certificate and key files, reloaded on SIGHUP
//!
//! Both modes drain connections on SIGTERM/SIGINT. Manual mode can also run a
//! plain HTTP listener that redirects everything to HTTPS.

mod redirect;
mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};

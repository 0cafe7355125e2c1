//! VolunTodo landing page server.
//!
//! Serves the "coming soon" page with environment-aware canonical metadata,
//! a JSON health endpoint, and static assets.

pub mod canonical;
pub mod config;
pub mod content;
pub mod environment;
pub mod error;
pub mod http;
pub mod metadata;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use canonical::{canonical_url, get_canonical_url};
pub use environment::{get_environment, resolve_environment, EnvironmentDescriptor};
pub use error::AppError;

//! Storefront web application.
//!
//! Thin HTTP orchestration over the domain crates: each handler opens the
//! cart session from the request, calls the pure cart primitives and the
//! catalog client, and commits the session back out as a `Set-Cookie`
//! header. The server holds no cart state of its own.

pub mod config;
pub mod error;
pub mod handlers;
pub mod intent;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;

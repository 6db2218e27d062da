//! Signed cookie session storage for the storefront cart.
//!
//! The cart never touches server-side storage: it round-trips through the
//! client inside a single signed cookie. A request's handler opens the
//! session from the `Cookie` header, mutates the cart value in memory, and
//! commits the session back out as a `Set-Cookie` header.
//!
//! Tampered, malformed, or missing cookies all degrade to a fresh empty
//! session; corruption is never an error surfaced to the caller.

mod config;
mod cookie_sign;
mod secret;
mod session;

pub use config::{SameSite, SessionConfig};
pub use cookie_sign::{sign_payload, verify_signed_value};
pub use secret::SecretKey;
pub use session::{CartSession, SessionError};

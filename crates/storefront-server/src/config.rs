//! Server configuration from the environment.

use std::env;
use std::net::SocketAddr;

use anyhow::{bail, Context};
use storefront_session::{SecretKey, SessionConfig};

/// Default catalog endpoint.
const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";

/// Default bind address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the remote catalog service.
    pub catalog_base_url: String,
    /// Cart session cookie settings, including the signing secret.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `SESSION_SECRET` is mandatory: starting without one (or with one too
    /// short to sign with) is a hard error, never a silent fallback to a
    /// development secret.
    ///
    /// Optional variables: `BIND_ADDR`, `CATALOG_BASE_URL`, and
    /// `COOKIE_SECURE` (set to `false` for plain-HTTP local development).
    pub fn from_env() -> anyhow::Result<Self> {
        let Ok(secret) = env::var("SESSION_SECRET") else {
            bail!("SESSION_SECRET is not set; refusing to start with an unsigned session cookie");
        };

        let mut session = SessionConfig::new(SecretKey::new(secret));
        if let Err(reason) = session.validate() {
            bail!("SESSION_SECRET is unusable: {reason}");
        }

        if let Ok(value) = env::var("COOKIE_SECURE") {
            session.cookie_secure = value
                .parse::<bool>()
                .context("COOKIE_SECURE must be true or false")?;
        }

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000")?;

        let catalog_base_url =
            env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_owned());

        Ok(Self {
            bind_addr,
            catalog_base_url,
            session,
        })
    }
}

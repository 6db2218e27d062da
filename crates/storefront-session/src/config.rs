//! Cookie/session configuration.

use std::time::Duration;

use crate::SecretKey;

/// `SameSite` attribute for the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    None,
    #[default]
    Lax,
    Strict,
}

/// Configuration for the cart session cookie.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
    pub cookie_same_site: SameSite,
    /// Full expiry window, measured from each commit (sliding expiry).
    pub max_age: Duration,
    pub secret: SecretKey,
}

impl SessionConfig {
    /// Session lifetime: one week from the last commit.
    pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 7);

    /// Build a config around a signing secret, with the standard cookie
    /// attributes (httpOnly, SameSite=Lax, path=/, secure).
    pub fn new(secret: SecretKey) -> Self {
        Self {
            cookie_name: "cart".to_owned(),
            cookie_path: "/".to_owned(),
            cookie_secure: true,
            cookie_http_only: true,
            cookie_same_site: SameSite::Lax,
            max_age: Self::DEFAULT_MAX_AGE,
            secret,
        }
    }

    /// Reject configs whose secret is unusable for signing.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.secret.is_empty() {
            return Err("session secret must not be empty");
        }
        if self.secret.len() < 32 {
            return Err("session secret should be at least 32 bytes");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new(SecretKey::new("x".repeat(32)));
        assert_eq!(config.cookie_name, "cart");
        assert_eq!(config.cookie_path, "/");
        assert!(config.cookie_secure);
        assert!(config.cookie_http_only);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert_eq!(config.max_age, Duration::from_secs(604_800));
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let config = SessionConfig::new(SecretKey::new("short"));
        assert!(config.validate().is_err());

        let config = SessionConfig::new(SecretKey::new(""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_long_secret() {
        let config = SessionConfig::new(SecretKey::new("a".repeat(32)));
        assert!(config.validate().is_ok());
    }
}

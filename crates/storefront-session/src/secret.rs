//! Sensitive data wrapper for the cookie signing secret.

use std::fmt;

/// The cookie signing secret.
///
/// Implements `Debug` and `Display` as `[REDACTED]` so the secret cannot
/// leak through logging.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    /// Wrap a secret value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Expose the secret bytes for signing.
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns true if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::new("super-secret-value");
        assert_eq!(format!("{key:?}"), "SecretKey([REDACTED])");
        assert_eq!(format!("{key}"), "[REDACTED]");
    }

    #[test]
    fn test_expose() {
        let key = SecretKey::new("abc");
        assert_eq!(key.expose(), b"abc");
        assert_eq!(key.len(), 3);
        assert!(!key.is_empty());
    }
}

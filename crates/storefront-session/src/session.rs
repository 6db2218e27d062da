//! The cart session: an explicit value threaded through each request.

use cookie::{Cookie, SameSite as CookieSameSite};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_commerce::cart::Cart;

use crate::cookie_sign::{sign_payload, verify_signed_value};
use crate::{SameSite, SessionConfig};

/// Errors that can occur when committing a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to serialize the session payload.
    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What actually travels inside the cookie.
///
/// Exactly one optional named value: the cart. A cleared session omits the
/// key entirely, which is distinct from storing an empty cart even though
/// both read back as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    cart: Option<Cart>,
}

/// A request-scoped cart session.
///
/// Parsed from the incoming `Cookie` header, mutated in memory by the
/// handler, and persisted by emitting the value of [`commit`](Self::commit)
/// as a `Set-Cookie` header. Holding one of these has no side effects.
#[derive(Debug, Default)]
pub struct CartSession {
    payload: SessionPayload,
}

impl CartSession {
    /// Open the session carried by a request's `Cookie` header.
    ///
    /// Never fails: a missing cookie, an unparseable header, a bad
    /// signature, or a corrupt payload all degrade to a fresh empty
    /// session.
    pub fn open(cookie_header: Option<&str>, config: &SessionConfig) -> Self {
        let Some(header) = cookie_header else {
            return Self::default();
        };

        for cookie in Cookie::split_parse(header.to_owned()).flatten() {
            if cookie.name() != config.cookie_name {
                continue;
            }
            let Some(payload) = verify_signed_value(cookie.value(), &config.secret) else {
                return Self::default();
            };
            return match serde_json::from_slice::<SessionPayload>(&payload) {
                Ok(payload) => Self { payload },
                Err(err) => {
                    tracing::warn!(error = %err, "session payload corrupt, starting fresh");
                    Self::default()
                }
            };
        }

        Self::default()
    }

    /// The stored cart, or an empty one when none is set. Pure read.
    pub fn cart(&self) -> Cart {
        self.payload.cart.clone().unwrap_or_default()
    }

    /// Replace the stored cart in memory. Nothing persists until
    /// [`commit`](Self::commit).
    pub fn set_cart(&mut self, cart: Cart) {
        self.payload.cart = Some(cart);
    }

    /// Remove the cart key from the session entirely.
    pub fn clear(&mut self) {
        self.payload.cart = None;
    }

    /// Whether the cart key is present at all (a written-but-empty cart
    /// still counts as present).
    pub fn has_cart(&self) -> bool {
        self.payload.cart.is_some()
    }

    /// Serialize and sign the session into a `Set-Cookie` header value.
    ///
    /// The expiry window restarts at every commit (sliding, not absolute).
    pub fn commit(&self, config: &SessionConfig) -> Result<String, SessionError> {
        let payload = serde_json::to_vec(&self.payload)?;
        let signed = sign_payload(&payload, &config.secret);

        let same_site = match config.cookie_same_site {
            SameSite::None => CookieSameSite::None,
            SameSite::Lax => CookieSameSite::Lax,
            SameSite::Strict => CookieSameSite::Strict,
        };

        let cookie = Cookie::build((config.cookie_name.clone(), signed))
            .path(config.cookie_path.clone())
            .secure(config.cookie_secure)
            .http_only(config.cookie_http_only)
            .same_site(same_site)
            .max_age(cookie::time::Duration::seconds(
                config.max_age.as_secs() as i64
            ))
            .build();

        Ok(cookie.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretKey;
    use storefront_commerce::cart::CartItem;

    fn config() -> SessionConfig {
        SessionConfig::new(SecretKey::new("test-secret-key-that-is-long-enough"))
    }

    fn item(id: i64, quantity: i64) -> CartItem {
        CartItem {
            id,
            title: format!("Product {id}"),
            price: 9.99,
            thumbnail: String::new(),
            quantity,
        }
    }

    fn cookie_pair(set_cookie: &str) -> String {
        // Strip the attributes, keeping `name=value` for the next request.
        set_cookie
            .split(';')
            .next()
            .unwrap_or_default()
            .to_owned()
    }

    #[test]
    fn test_open_without_header_is_empty() {
        let session = CartSession::open(None, &config());
        assert!(session.cart().is_empty());
        assert!(!session.has_cart());
    }

    #[test]
    fn test_commit_and_reopen_round_trip() {
        let config = config();
        let mut session = CartSession::open(None, &config);
        session.set_cart(Cart::default().upsert(item(1, 2)));

        let set_cookie = session.commit(&config).unwrap();
        let header = cookie_pair(&set_cookie);

        let reopened = CartSession::open(Some(&header), &config);
        assert_eq!(reopened.cart().get(1).map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_tampered_cookie_degrades_to_empty() {
        let config = config();
        let mut session = CartSession::default();
        session.set_cart(Cart::default().upsert(item(1, 2)));
        let set_cookie = session.commit(&config).unwrap();
        let header = cookie_pair(&set_cookie);

        let tampered = format!("{}x", header);
        let reopened = CartSession::open(Some(&tampered), &config);
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_wrong_secret_degrades_to_empty() {
        let config = config();
        let mut session = CartSession::default();
        session.set_cart(Cart::default().upsert(item(1, 2)));
        let header = cookie_pair(&session.commit(&config).unwrap());

        let other =
            SessionConfig::new(SecretKey::new("another-secret-key-that-is-long-enough"));
        let reopened = CartSession::open(Some(&header), &other);
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_garbage_header_degrades_to_empty() {
        let session = CartSession::open(Some("cart=not-a-signed-value"), &config());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_other_cookies_are_ignored() {
        let session = CartSession::open(Some("theme=dark; lang=en"), &config());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_clear_removes_key_but_empty_cart_keeps_it() {
        let config = config();

        let mut cleared = CartSession::default();
        cleared.set_cart(Cart::default().upsert(item(1, 1)));
        cleared.clear();
        assert!(!cleared.has_cart());

        let mut emptied = CartSession::default();
        emptied.set_cart(Cart::default());
        assert!(emptied.has_cart());

        // Both are observably empty carts on the next read.
        let cleared_again =
            CartSession::open(Some(&cookie_pair(&cleared.commit(&config).unwrap())), &config);
        let emptied_again =
            CartSession::open(Some(&cookie_pair(&emptied.commit(&config).unwrap())), &config);
        assert!(cleared_again.cart().is_empty());
        assert!(emptied_again.cart().is_empty());
        assert!(!cleared_again.has_cart());
        assert!(emptied_again.has_cart());
    }

    #[test]
    fn test_commit_sets_cookie_attributes() {
        let config = config();
        let set_cookie = CartSession::default().commit(&config).unwrap();

        assert!(set_cookie.starts_with("cart="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Secure"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("Max-Age=604800"));
    }
}

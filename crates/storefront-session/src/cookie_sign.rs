//! Signed cookie payload helpers.
//!
//! The cookie value is `base64url(payload) + "." + hex(hmac_sha256(payload))`,
//! making the session tamper-evident without server-side state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload, producing a cookie-safe value.
pub fn sign_payload(payload: &[u8], secret: &SecretKey) -> String {
    let signature = compute_hmac(payload, secret.expose());
    format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(payload),
        hex::encode(signature)
    )
}

/// Verify a signed cookie value and recover the payload bytes.
///
/// Returns `None` for any structural problem (no separator, bad base64, bad
/// hex) or signature mismatch.
pub fn verify_signed_value(value: &str, secret: &SecretKey) -> Option<Vec<u8>> {
    let (encoded, signature_hex) = value.rsplit_once('.')?;

    let payload = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let actual_sig = hex::decode(signature_hex).ok()?;
    let expected_sig = compute_hmac(&payload, secret.expose());

    if constant_time_eq(&expected_sig, &actual_sig) {
        Some(payload)
    } else {
        tracing::warn!(
            cookie_prefix = %value.chars().take(8).collect::<String>(),
            "session cookie tampered"
        );
        None
    }
}

/// Computes HMAC-SHA256.
///
/// # Panics
///
/// This function cannot panic as HMAC accepts keys of any size.
fn compute_hmac(message: &[u8], key: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

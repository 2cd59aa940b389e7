//! HMAC-SHA256 checkout signatures

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signed message for a checkout: `order_id|payment_id`
fn signed_payload(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}

/// Lower-case hex HMAC-SHA256 of `order_id|payment_id` under `secret`
pub fn compute_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    // HMAC accepts keys of any length
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(signed_payload(order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compare a supplied signature with the expected one in constant time
///
/// Hex case is ignored; an empty secret or signature never verifies.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    if secret.is_empty() || signature.is_empty() {
        return false;
    }
    let expected = compute_signature(secret, order_id, payment_id);
    let supplied = signature.trim().to_ascii_lowercase();
    constant_time_eq(expected.as_bytes(), supplied.as_bytes())
}

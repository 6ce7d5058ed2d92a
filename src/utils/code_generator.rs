//! Short code generation.
//!
//! A generated code is a random base-36 fragment followed by the base-36 encoding
//! of the current Unix time in milliseconds, so two codes made at different
//! instants practically never collide. Uniqueness against the registry is checked
//! by the caller.

use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters at the start of a generated code.
pub const RANDOM_FRAGMENT_LEN: usize = 5;

/// Generates a short code whose time fragment encodes `now`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code_at(Utc::now());
/// assert!(code.len() > RANDOM_FRAGMENT_LEN);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code_at(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();

    let mut code: String = (0..RANDOM_FRAGMENT_LEN)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect();

    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    code.push_str(&to_base36(millis));
    code
}

/// Encodes a number in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}

//! Note identifier generation.
//!
//! Ids are a base-36 timestamp followed by base-36 random digits, so they
//! sort roughly by creation time and are practically unique. The store
//! still checks for collisions before using one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Number of random base-36 digits appended after the time component.
pub const RANDOM_DIGITS: usize = 11;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new id from the current time and a fresh random value.
pub fn generate() -> String {
    generate_at(Utc::now(), Uuid::new_v4().as_u128() as u64)
}

/// Generate an id from an explicit time and entropy source.
pub fn generate_at(now: DateTime<Utc>, entropy: u64) -> String {
    let millis = now.timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);
    let random = to_base36(entropy);
    // Left-pad so the random part always has a fixed width before truncation.
    for _ in random.len()..RANDOM_DIGITS {
        id.push('0');
    }
    id.extend(random.chars().take(RANDOM_DIGITS));
    id
}

/// Encode an unsigned integer in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

//! Client-side id generation

use chrono::Utc;
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Generate a restaurant id: `r_<unix-millis>_<6 random base36 chars>`.
///
/// Used when a record is first saved without an id; the backend treats the
/// id as opaque.
pub fn restaurant_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("r_{}_{}", Utc::now().timestamp_millis(), suffix)
}

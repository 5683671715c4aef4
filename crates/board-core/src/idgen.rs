//! SHA256 + base36 project id generation.

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

/// Base36 alphabet (0-9, a-z).
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default id prefix (`prj-xxxxxx`).
pub const DEFAULT_PREFIX: &str = "prj";

/// Default number of base36 characters after the prefix.
pub const DEFAULT_LENGTH: usize = 6;

/// Converts a byte slice to a base36 string of exactly `length` characters.
///
/// Shorter results are left-padded with zeros; longer ones keep the least
/// significant digits.
pub fn encode_base36(data: &[u8], length: usize) -> String {
    let mut num = BigUint::from_bytes_be(data);
    let base = BigUint::from(36u32);
    let zero = BigUint::zero();

    // Least-significant digit first.
    let mut digits: Vec<char> = Vec::with_capacity(length);
    while num > zero {
        let rem = &num % &base;
        num /= &base;
        let i = rem.to_u32_digits().first().copied().unwrap_or(0) as usize;
        digits.push(char::from(BASE36_ALPHABET[i]));
    }

    while digits.len() < length {
        digits.push('0');
    }
    digits.truncate(length);
    digits.iter().rev().collect()
}

/// Number of hash bytes needed to fill `length` base36 characters.
fn hash_bytes_for(length: usize) -> usize {
    match length {
        0..=3 => 2,
        4 => 3,
        5 | 6 => 4,
        7 | 8 => 5,
        _ => 8,
    }
}

/// Creates a hash-based id for a project.
///
/// The same inputs always produce the same id; callers vary `nonce` to
/// resolve collisions.
pub fn generate_project_id(
    prefix: &str,
    title: &str,
    description: &str,
    timestamp: DateTime<Utc>,
    length: usize,
    nonce: u64,
) -> String {
    let content = format!(
        "{}|{}|{}|{}",
        title,
        description,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );

    let hash = Sha256::digest(content.as_bytes());
    let short_hash = encode_base36(&hash[..hash_bytes_for(length)], length);
    format!("{}-{}", prefix, short_hash)
}

/// Generates an id for which `is_taken` returns `false`.
///
/// Starts from `nonce` and increments until an unused id is found, so two
/// projects created with identical text in the same instant still differ.
pub fn generate_unique_id(
    prefix: &str,
    title: &str,
    description: &str,
    timestamp: DateTime<Utc>,
    length: usize,
    mut nonce: u64,
    is_taken: impl Fn(&str) -> bool,
) -> String {
    loop {
        let id = generate_project_id(prefix, title, description, timestamp, length, nonce);
        if !is_taken(&id) {
            return id;
        }
        tracing::debug!(%id, nonce, "project id collision, retrying");
        nonce = nonce.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_ts() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn encode_base36_pads_empty_input() {
        assert_eq!(encode_base36(&[], 4), "0000");
    }

    #[test]
    fn encode_base36_small_value() {
        // 35 -> "z", 36 -> "10"
        assert_eq!(encode_base36(&[35], 3), "00z");
        assert_eq!(encode_base36(&[36], 3), "010");
    }

    #[test]
    fn encode_base36_truncates_to_length() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(encode_base36(&data, 3).len(), 3);
    }

    #[test]
    fn project_id_format() {
        let id = generate_project_id("prj", "Title", "desc", Utc::now(), 6, 0);
        assert!(id.starts_with("prj-"));
        assert_eq!(id.len(), "prj-".len() + 6);
    }

    #[test]
    fn project_id_deterministic() {
        let a = generate_project_id("prj", "Title", "Desc", fixed_ts(), 6, 0);
        let b = generate_project_id("prj", "Title", "Desc", fixed_ts(), 6, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn nonce_changes_output() {
        let a = generate_project_id("prj", "Title", "Desc", fixed_ts(), 6, 0);
        let b = generate_project_id("prj", "Title", "Desc", fixed_ts(), 6, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn unique_id_skips_taken_ids() {
        let first = generate_project_id("prj", "T", "D", fixed_ts(), 6, 0);
        let id = generate_unique_id("prj", "T", "D", fixed_ts(), 6, 0, |candidate| {
            candidate == first
        });
        assert_ne!(id, first);
        assert_eq!(id, generate_project_id("prj", "T", "D", fixed_ts(), 6, 1));
    }
}

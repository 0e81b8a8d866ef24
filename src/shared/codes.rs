//! Identifier and short-code generation
//!
//! Every call is independent: no sequence state, no uniqueness checks.
//! `rand::thread_rng` is a CSPRNG, which the short codes rely on.

use rand::Rng;
use uuid::Uuid;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random 128-bit identifier in canonical hyphenated form (36 chars).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Random code of exactly `length` characters from `A-Z0-9`.
pub fn alphanumeric_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// Random code of exactly `length` decimal digits, leading zeros allowed.
pub fn numeric_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_canonical_uuid() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(groups.len(), 5);
        let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lens, vec![8, 4, 4, 4, 12]);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
    }

    #[test]
    fn new_id_does_not_repeat() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn alphanumeric_code_has_exact_length() {
        assert_eq!(alphanumeric_code(8).len(), 8);
        assert_eq!(alphanumeric_code(16).len(), 16);
        assert_eq!(alphanumeric_code(0).len(), 0);
    }

    #[test]
    fn alphanumeric_code_uses_uppercase_alphabet() {
        let code = alphanumeric_code(100);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn alphanumeric_codes_differ() {
        assert_ne!(alphanumeric_code(8), alphanumeric_code(8));
    }

    #[test]
    fn numeric_code_is_all_digits() {
        let code = numeric_code(10);
        assert_eq!(code.len(), 10);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn numeric_code_has_exact_length() {
        assert_eq!(numeric_code(4).len(), 4);
        assert_eq!(numeric_code(6).len(), 6);
    }
}

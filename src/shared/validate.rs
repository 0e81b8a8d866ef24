//! String validation predicates
//!
//! Pure total functions over `&str`: invalid input yields `false`,
//! never an error. Callers map absent fields to the empty string.

use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern is valid")
    })
}

/// True iff the string has non-whitespace content.
pub fn is_not_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True iff the string is shaped like `local@domain.tld`.
pub fn is_valid_email(text: &str) -> bool {
    email_pattern().is_match(text)
}

/// True iff the string is an E.164-shaped phone number: an optional
/// leading `+`, a digit 1-9, then 1 to 14 further digits.
pub fn is_valid_phone(text: &str) -> bool {
    phone_pattern().is_match(text)
}

/// True iff the string is at least `min_length` characters long.
pub fn has_min_length(text: &str, min_length: usize) -> bool {
    text.chars().count() >= min_length
}

// ── Tests ──────────────────────────────────────────────────────

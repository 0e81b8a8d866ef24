//! Display formatting for instants, integers, currency and ratios
//!
//! One fixed locale: `,` thousands grouping, `$` currency prefix,
//! `%Y-%m-%d %H:%M:%S` default instant rendering. Absent instants
//! render the literal `N/A`.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Default instant rendering, e.g. `2026-01-06 13:30:45`.
pub const DEFAULT_INSTANT_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Rendering for an absent instant.
pub const MISSING: &str = "N/A";

/// Render an instant with the default pattern; `None` renders [`MISSING`].
pub fn instant(ts: Option<DateTime<Utc>>) -> String {
    instant_with(ts, DEFAULT_INSTANT_PATTERN)
}

/// Render an instant with a caller-supplied strftime pattern; `None`
/// renders [`MISSING`]. The pattern must be a valid strftime string.
pub fn instant_with(ts: Option<DateTime<Utc>>, pattern: &str) -> String {
    match ts {
        Some(ts) => ts.format(pattern).to_string(),
        None => MISSING.to_string(),
    }
}

/// Render an integer with thousands grouping, e.g. `1,000,000`.
pub fn integer(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&n.unsigned_abs().to_string()))
}

/// Render a currency amount: `$` prefix, thousands grouping, exactly
/// two fractional digits, half-up rounding, e.g. `$1,000,000.50`.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(units), cents)
}

/// Render a ratio as a whole percentage: the value scaled by 100 with a
/// trailing `%`. Rounding is half-up on the exact decimal, so
/// `0.755` renders `76%`.
pub fn ratio(value: Decimal) -> String {
    let percent =
        (value * Decimal::ONE_HUNDRED).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if percent.is_zero() {
        return "0%".to_string();
    }
    let sign = if percent.is_sign_negative() { "-" } else { "" };
    format!("{}{}%", sign, group_thousands(&percent.abs().to_string()))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    fn known_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 6, 13, 30, 45).unwrap()
    }

    #[test]
    fn instant_default_pattern() {
        assert_eq!(instant(Some(known_instant())), "2026-01-06 13:30:45");
    }

    #[test]
    fn instant_absent_renders_na() {
        assert_eq!(instant(None), "N/A");
        assert_eq!(instant_with(None, "%d/%m/%Y"), "N/A");
    }

    #[test]
    fn instant_custom_patterns() {
        assert_eq!(instant_with(Some(known_instant()), "%d/%m/%Y"), "06/01/2026");
        assert_eq!(instant_with(Some(known_instant()), "%H:%M:%S"), "13:30:45");
    }

    #[test]
    fn instant_midnight() {
        let midnight = Utc.with_ymd_and_hms(2026, 1, 6, 0, 0, 0).unwrap();
        assert_eq!(instant(Some(midnight)), "2026-01-06 00:00:00");
    }

    #[test]
    fn integer_grouping() {
        assert_eq!(integer(100), "100");
        assert_eq!(integer(1_000), "1,000");
        assert_eq!(integer(1_000_000), "1,000,000");
        assert_eq!(integer(0), "0");
    }

    #[test]
    fn integer_negative() {
        assert_eq!(integer(-1_234_567), "-1,234,567");
    }

    #[test]
    fn currency_whole_and_decimal() {
        assert_eq!(currency(Decimal::from(100)), "$100.00");
        assert_eq!(currency(Decimal::from_str("999.99").unwrap()), "$999.99");
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(
            currency(Decimal::from_str("1000000.50").unwrap()),
            "$1,000,000.50"
        );
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(currency(Decimal::from_str("1.005").unwrap()), "$1.01");
        assert_eq!(currency(Decimal::from_str("2.344").unwrap()), "$2.34");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(currency(Decimal::from_str("-1234.5").unwrap()), "-$1,234.50");
    }

    #[test]
    fn ratio_whole_values() {
        assert_eq!(ratio(Decimal::ZERO), "0%");
        assert_eq!(ratio(Decimal::from_str("0.15").unwrap()), "15%");
        assert_eq!(ratio(Decimal::ONE), "100%");
    }

    #[test]
    fn ratio_rounds_half_up_on_exact_decimal() {
        assert_eq!(ratio(Decimal::from_str("0.755").unwrap()), "76%");
        assert_eq!(ratio(Decimal::from_str("0.754").unwrap()), "75%");
    }

    #[test]
    fn ratio_groups_large_values() {
        assert_eq!(ratio(Decimal::from_str("12.345").unwrap()), "1,235%");
    }
}

//! Best-effort cleaning of the loosely formatted numbers found in the catalog
//! and in production logs ("1,234 kg", "약 5,000", "12.5톤", "-").

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder shown when a value cannot be read as a number.
pub const PLACEHOLDER: &str = "-";

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Strip every non-digit character; a leading minus sign is kept.
/// Only the integer part before the first '.' is read.
pub fn clean_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let negative = trimmed.starts_with('-');
    let integer_part = trimmed.split('.').next().unwrap_or("");
    let digits = NON_NUMERIC.replace_all(integer_part, "");

    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Group digits by thousands: 1234567 → "1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if value < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Clean and re-format a quantity, or return the placeholder.
pub fn format_quantity(raw: &str) -> String {
    match clean_number(raw) {
        Some(v) => group_thousands(v),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_units_and_separators() {
        assert_eq!(clean_number("1,234 kg"), Some(1234));
        assert_eq!(clean_number("약 5,000박스"), Some(5000));
        assert_eq!(clean_number("12.5톤"), Some(12));
        assert_eq!(clean_number("-300"), Some(-300));
    }

    #[test]
    fn non_numeric_input_degrades_to_placeholder() {
        assert_eq!(clean_number("-"), None);
        assert_eq!(clean_number(""), None);
        assert_eq!(clean_number("생산 없음"), None);
        assert_eq!(format_quantity("N/A"), PLACEHOLDER);
        assert_eq!(format_quantity("nan"), PLACEHOLDER);
    }

    #[test]
    fn formats_with_thousands_separator() {
        assert_eq!(format_quantity("1234567"), "1,234,567");
        assert_eq!(format_quantity("999"), "999");
        assert_eq!(group_thousands(-1000), "-1,000");
    }

    #[test]
    fn overflowing_digit_runs_do_not_panic() {
        assert_eq!(clean_number("99999999999999999999999"), None);
    }
}

//! Journal entry number formatting.
//!
//! Entry numbers follow `{prefix}-{YYYY}{MM}-{seq:06}` (e.g.
//! `JE-202601-000042`), sequenced per tenant per calendar month of the
//! entry's creation timestamp. The store owns the counters; this module
//! only formats and parses.

/// Formats an entry number.
#[must_use]
pub fn format_entry_number(prefix: &str, year: i32, month: u32, sequence: u32) -> String {
    format!("{prefix}-{year:04}{month:02}-{sequence:06}")
}

/// Extracts the sequence of `entry_number` if it belongs to the given
/// prefix and period, `None` otherwise.
#[must_use]
pub fn parse_sequence(prefix: &str, year: i32, month: u32, entry_number: &str) -> Option<u32> {
    let period_prefix = format!("{prefix}-{year:04}{month:02}-");
    let suffix = entry_number.strip_prefix(&period_prefix)?;
    if suffix.is_empty() {
        return None;
    }
    suffix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_format_entry_number() {
        assert_eq!(format_entry_number("JE", 2026, 1, 1), "JE-202601-000001");
        assert_eq!(format_entry_number("JE", 2026, 12, 42), "JE-202612-000042");
    }

    #[test]
    fn test_format_overflows_padding_gracefully() {
        assert_eq!(
            format_entry_number("JE", 2026, 1, 1_234_567),
            "JE-202601-1234567"
        );
    }

    #[rstest]
    #[case("JE-202601-000001", Some(1))]
    #[case("JE-202601-000042", Some(42))]
    #[case("JE-202602-000001", None)] // wrong month
    #[case("JE-202501-000001", None)] // wrong year
    #[case("XX-202601-000001", None)] // wrong prefix
    #[case("JE-202601-", None)] // empty sequence
    #[case("JE-202601-abc", None)] // non-numeric sequence
    fn test_parse_sequence(#[case] entry_number: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_sequence("JE", 2026, 1, entry_number), expected);
    }

    #[test]
    fn test_round_trip() {
        let number = format_entry_number("JE", 2026, 7, 99);
        assert_eq!(parse_sequence("JE", 2026, 7, &number), Some(99));
    }
}

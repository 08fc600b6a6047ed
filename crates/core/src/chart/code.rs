//! Hierarchical account-code generation.
//!
//! Codes form a dotted path: root accounts get a single digit determined by
//! their type, children get the parent's code plus a two-digit suffix
//! (`1.01`, `1.02`, ...).

use super::account::AccountType;

/// Returns the root code digit for a top-level account of the given type.
///
/// An absent type maps to the catch-all digit "9".
#[must_use]
pub const fn root_code(account_type: Option<AccountType>) -> &'static str {
    match account_type {
        Some(AccountType::Asset) => "1",
        Some(AccountType::Liability) => "2",
        Some(AccountType::Equity) => "3",
        Some(AccountType::Revenue) => "4",
        Some(AccountType::Expense) => "5",
        None => "9",
    }
}

/// Extracts the numeric child sequence of `code` under `parent_code`.
///
/// Returns `None` if `code` is not a direct numeric child (wrong prefix,
/// deeper nesting, or a non-numeric suffix).
#[must_use]
pub fn child_sequence(parent_code: &str, code: &str) -> Option<u32> {
    let suffix = code.strip_prefix(parent_code)?.strip_prefix('.')?;
    if suffix.is_empty() || suffix.contains('.') {
        return None;
    }
    suffix.parse().ok()
}

/// Generates the next child code under `parent_code` given the existing
/// sibling codes.
///
/// Picks the numerically highest existing suffix and increments it; with no
/// siblings the first child is `{parent}.01`. Suffixes are zero-padded to
/// two digits.
#[must_use]
pub fn next_child_code<I, S>(parent_code: &str, sibling_codes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let highest = sibling_codes
        .into_iter()
        .filter_map(|code| child_sequence(parent_code, code.as_ref()))
        .max()
        .unwrap_or(0);

    format!("{parent_code}.{:02}", highest + 1)
}

/// Returns the account's own code segment relative to its parent.
///
/// Stored codes are fully qualified, so a child's segment is its code with
/// the parent prefix stripped; a root account's segment is its whole code.
/// Codes that do not follow the parent's prefix are returned unchanged.
#[must_use]
pub fn own_segment<'a>(code: &'a str, parent_code: Option<&str>) -> &'a str {
    match parent_code {
        Some(parent) => code
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(code),
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(AccountType::Asset), "1")]
    #[case(Some(AccountType::Liability), "2")]
    #[case(Some(AccountType::Equity), "3")]
    #[case(Some(AccountType::Revenue), "4")]
    #[case(Some(AccountType::Expense), "5")]
    #[case(None, "9")]
    fn test_root_code(#[case] account_type: Option<AccountType>, #[case] expected: &str) {
        assert_eq!(root_code(account_type), expected);
    }

    #[test]
    fn test_first_child_code() {
        assert_eq!(next_child_code("1", Vec::<&str>::new()), "1.01");
    }

    #[test]
    fn test_next_child_code_increments_highest() {
        assert_eq!(next_child_code("1", ["1.01"]), "1.02");
        assert_eq!(next_child_code("1", ["1.01", "1.03", "1.02"]), "1.04");
    }

    #[test]
    fn test_next_child_code_beyond_two_digits() {
        assert_eq!(next_child_code("1", ["1.09"]), "1.10");
        assert_eq!(next_child_code("1", ["1.99"]), "1.100");
    }

    #[test]
    fn test_next_child_code_ignores_unrelated_codes() {
        // Grandchildren, other roots, and non-numeric suffixes don't count.
        assert_eq!(
            next_child_code("1", ["1.01.05", "2.07", "1.xx", "1.01"]),
            "1.02"
        );
    }

    #[test]
    fn test_nested_child_code() {
        assert_eq!(next_child_code("1.02", ["1.02.01"]), "1.02.02");
    }

    #[test]
    fn test_child_sequence() {
        assert_eq!(child_sequence("1", "1.01"), Some(1));
        assert_eq!(child_sequence("1", "1.12"), Some(12));
        assert_eq!(child_sequence("1", "1.01.02"), None);
        assert_eq!(child_sequence("1", "2.01"), None);
        assert_eq!(child_sequence("1", "1"), None);
    }

    #[test]
    fn test_own_segment() {
        assert_eq!(own_segment("1", None), "1");
        assert_eq!(own_segment("1.01", Some("1")), "01");
        assert_eq!(own_segment("1.01.02", Some("1.01")), "02");
        // Custom code that doesn't follow the parent prefix stays whole.
        assert_eq!(own_segment("9000", Some("1")), "9000");
    }
}

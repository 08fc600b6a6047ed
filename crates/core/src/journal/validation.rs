//! Business rule validation for journal entries.
//!
//! Pure validation logic: storage hands in account flags via a lookup
//! closure, so these rules stay free of any persistence concern.

use arca_shared::types::AccountId;
use rust_decimal::Decimal;

use super::entry::JournalLine;
use super::types::LineInput;
use crate::error::LedgerError;

/// Access to the amounts and account of a journal line, for validation
/// over both stored lines and line inputs.
pub trait LineAmounts {
    /// The account the line posts to.
    fn account_id(&self) -> AccountId;
    /// The line's debit amount.
    fn debit_amount(&self) -> Decimal;
    /// The line's credit amount.
    fn credit_amount(&self) -> Decimal;
}

impl LineAmounts for LineInput {
    fn account_id(&self) -> AccountId {
        self.account_id
    }

    fn debit_amount(&self) -> Decimal {
        self.debit_amount
    }

    fn credit_amount(&self) -> Decimal {
        self.credit_amount
    }
}

impl LineAmounts for JournalLine {
    fn account_id(&self) -> AccountId {
        self.account_id
    }

    fn debit_amount(&self) -> Decimal {
        self.debit_amount
    }

    fn credit_amount(&self) -> Decimal {
        self.credit_amount
    }
}

/// Debit and credit totals of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTotals {
    /// Sum of line debit amounts.
    pub total_debit: Decimal,
    /// Sum of line credit amounts.
    pub total_credit: Decimal,
}

impl EntryTotals {
    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }

    /// Returns true if the totals agree within `tolerance`.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.difference().abs() < tolerance
    }
}

/// Calculates entry totals from its lines.
#[must_use]
pub fn calculate_totals<L: LineAmounts>(lines: &[L]) -> EntryTotals {
    EntryTotals {
        total_debit: lines.iter().map(LineAmounts::debit_amount).sum(),
        total_credit: lines.iter().map(LineAmounts::credit_amount).sum(),
    }
}

/// Validates line shape on entry creation.
///
/// Requires at least one line; amounts must be non-negative, and a line
/// may carry a debit or a credit but not both. Both-zero informational
/// lines pass.
///
/// # Errors
///
/// Returns `NoLines`, `NegativeAmount`, or `LineBothSides`.
pub fn validate_lines<L: LineAmounts>(lines: &[L]) -> Result<(), LedgerError> {
    if lines.is_empty() {
        return Err(LedgerError::NoLines);
    }

    for line in lines {
        let debit = line.debit_amount();
        let credit = line.credit_amount();

        if debit < Decimal::ZERO || credit < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        if debit > Decimal::ZERO && credit > Decimal::ZERO {
            return Err(LedgerError::LineBothSides);
        }
    }

    Ok(())
}

/// Account flags needed to validate a posting.
#[derive(Debug, Clone, Copy)]
pub struct AccountFlags {
    /// The account ID.
    pub id: AccountId,
    /// Whether the account is active.
    pub is_active: bool,
    /// Whether the account accepts journal lines.
    pub accepts_entries: bool,
    /// Whether the account has children.
    pub is_parent: bool,
}

impl AccountFlags {
    /// Returns true if journal lines may be posted against this account.
    #[must_use]
    pub fn is_postable(&self) -> bool {
        self.accepts_entries && !self.is_parent
    }
}

/// Validates that an entry may be posted.
///
/// Checks, in order:
/// 1. At least 2 lines
/// 2. Debit and credit totals agree within `tolerance`
/// 3. Every referenced account is active and postable
///
/// # Errors
///
/// Returns `InsufficientLines`, `ImbalancedEntry`, `AccountInactive`,
/// `AccountLocked`, or whatever the account lookup fails with.
pub fn validate_postable<L, A>(
    lines: &[L],
    tolerance: Decimal,
    account_lookup: A,
) -> Result<(), LedgerError>
where
    L: LineAmounts,
    A: Fn(AccountId) -> Result<AccountFlags, LedgerError>,
{
    if lines.len() < 2 {
        return Err(LedgerError::InsufficientLines);
    }

    let totals = calculate_totals(lines);
    if !totals.is_balanced(tolerance) {
        return Err(LedgerError::ImbalancedEntry {
            debit: totals.total_debit,
            credit: totals.total_credit,
        });
    }

    for line in lines {
        let flags = account_lookup(line.account_id())?;
        if !flags.is_active {
            return Err(LedgerError::AccountInactive(flags.id));
        }
        if !flags.is_postable() {
            return Err(LedgerError::AccountLocked(flags.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn ok_flags(id: AccountId) -> Result<AccountFlags, LedgerError> {
        Ok(AccountFlags {
            id,
            is_active: true,
            accepts_entries: true,
            is_parent: false,
        })
    }

    fn tolerance() -> Decimal {
        dec!(0.01)
    }

    #[test]
    fn test_calculate_totals() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100)),
            LineInput::credit(AccountId::new(), dec!(60)),
            LineInput::credit(AccountId::new(), dec!(40)),
        ];
        let totals = calculate_totals(&lines);
        assert_eq!(totals.total_debit, dec!(100));
        assert_eq!(totals.total_credit, dec!(100));
        assert!(totals.is_balanced(tolerance()));
    }

    #[test]
    fn test_validate_lines_empty() {
        let lines: Vec<LineInput> = vec![];
        assert!(matches!(validate_lines(&lines), Err(LedgerError::NoLines)));
    }

    #[test]
    fn test_validate_lines_negative_amount() {
        let lines = vec![LineInput::debit(AccountId::new(), dec!(-5))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::NegativeAmount)
        ));
    }

    #[test]
    fn test_validate_lines_both_sides() {
        let mut line = LineInput::debit(AccountId::new(), dec!(5));
        line.credit_amount = dec!(5);
        assert!(matches!(
            validate_lines(&[line]),
            Err(LedgerError::LineBothSides)
        ));
    }

    #[test]
    fn test_validate_lines_informational_zero_line() {
        let lines = vec![LineInput::debit(AccountId::new(), dec!(0))];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_validate_postable_balanced() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100)),
            LineInput::credit(AccountId::new(), dec!(100)),
        ];
        assert!(validate_postable(&lines, tolerance(), ok_flags).is_ok());
    }

    #[test]
    fn test_validate_postable_single_line() {
        let lines = vec![LineInput::debit(AccountId::new(), dec!(1000))];
        assert!(matches!(
            validate_postable(&lines, tolerance(), ok_flags),
            Err(LedgerError::InsufficientLines)
        ));
    }

    #[test]
    fn test_validate_postable_imbalanced() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(1000)),
            LineInput::credit(AccountId::new(), dec!(999)),
        ];
        assert!(matches!(
            validate_postable(&lines, tolerance(), ok_flags),
            Err(LedgerError::ImbalancedEntry { .. })
        ));
    }

    #[test]
    fn test_validate_postable_sub_tolerance_difference() {
        // A rounding remainder below the tolerance is accepted.
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100.005)),
            LineInput::credit(AccountId::new(), dec!(100.00)),
        ];
        assert!(validate_postable(&lines, tolerance(), ok_flags).is_ok());
    }

    #[test]
    fn test_validate_postable_inactive_account() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100)),
            LineInput::credit(AccountId::new(), dec!(100)),
        ];
        let inactive = |id: AccountId| {
            Ok(AccountFlags {
                id,
                is_active: false,
                accepts_entries: true,
                is_parent: false,
            })
        };
        assert!(matches!(
            validate_postable(&lines, tolerance(), inactive),
            Err(LedgerError::AccountInactive(_))
        ));
    }

    #[test]
    fn test_validate_postable_parent_account() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100)),
            LineInput::credit(AccountId::new(), dec!(100)),
        ];
        let parent = |id: AccountId| {
            Ok(AccountFlags {
                id,
                is_active: true,
                accepts_entries: true,
                is_parent: true,
            })
        };
        assert!(matches!(
            validate_postable(&lines, tolerance(), parent),
            Err(LedgerError::AccountLocked(_))
        ));
    }

    #[test]
    fn test_validate_postable_no_entries_account() {
        let lines = vec![
            LineInput::debit(AccountId::new(), dec!(100)),
            LineInput::credit(AccountId::new(), dec!(100)),
        ];
        let locked = |id: AccountId| {
            Ok(AccountFlags {
                id,
                is_active: true,
                accepts_entries: false,
                is_parent: false,
            })
        };
        assert!(matches!(
            validate_postable(&lines, tolerance(), locked),
            Err(LedgerError::AccountLocked(_))
        ));
    }

    /// Strategy for generating positive amounts with two decimal places.
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any entry built as matching debit/credit pairs passes validation.
        #[test]
        fn prop_paired_lines_are_postable(amounts in prop::collection::vec(amount_strategy(), 1..10)) {
            let mut lines = Vec::with_capacity(amounts.len() * 2);
            for amount in &amounts {
                lines.push(LineInput::debit(AccountId::new(), *amount));
                lines.push(LineInput::credit(AccountId::new(), *amount));
            }

            prop_assert!(validate_postable(&lines, tolerance(), ok_flags).is_ok());
        }

        /// Skewing one side of a balanced entry by at least the tolerance
        /// always trips the imbalance check.
        #[test]
        fn prop_skewed_entries_are_rejected(
            amount in amount_strategy(),
            skew in (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2)),
        ) {
            let lines = vec![
                LineInput::debit(AccountId::new(), amount + skew),
                LineInput::credit(AccountId::new(), amount),
            ];

            prop_assert!(
                matches!(
                    validate_postable(&lines, tolerance(), ok_flags),
                    Err(LedgerError::ImbalancedEntry { .. })
                ),
                "expected Err(LedgerError::ImbalancedEntry)"
            );
        }

        /// Totals are order-independent.
        #[test]
        fn prop_totals_order_independent(amounts in prop::collection::vec(amount_strategy(), 1..10)) {
            let lines: Vec<LineInput> = amounts
                .iter()
                .map(|a| LineInput::debit(AccountId::new(), *a))
                .collect();
            let mut reversed = lines.clone();
            reversed.reverse();

            prop_assert_eq!(calculate_totals(&lines), calculate_totals(&reversed));
        }
    }
}

//! Period balance summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::NormalBalance;

/// An account's activity over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBalance {
    /// Balance at the day before the period start.
    pub opening: Decimal,
    /// Sum of debits within the period.
    pub debits: Decimal,
    /// Sum of credits within the period.
    pub credits: Decimal,
    /// Signed change over the period, per the account's normal balance.
    pub net_change: Decimal,
    /// Balance at the period end.
    pub closing: Decimal,
}

impl PeriodBalance {
    /// Builds a period summary from the opening balance and the period's
    /// debit/credit sums, applying the account's sign convention.
    #[must_use]
    pub fn from_sums(
        normal_balance: NormalBalance,
        opening: Decimal,
        debits: Decimal,
        credits: Decimal,
    ) -> Self {
        let net_change = normal_balance.balance_change(debits, credits);
        Self {
            opening,
            debits,
            credits,
            net_change,
            closing: opening + net_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_normal_period() {
        let period = PeriodBalance::from_sums(NormalBalance::Debit, dec!(500), dec!(300), dec!(100));
        assert_eq!(period.net_change, dec!(200));
        assert_eq!(period.closing, dec!(700));
    }

    #[test]
    fn test_credit_normal_period() {
        let period =
            PeriodBalance::from_sums(NormalBalance::Credit, dec!(500), dec!(300), dec!(100));
        assert_eq!(period.net_change, dec!(-200));
        assert_eq!(period.closing, dec!(300));
    }

    #[test]
    fn test_quiet_period_preserves_opening() {
        let period = PeriodBalance::from_sums(NormalBalance::Debit, dec!(42), dec!(0), dec!(0));
        assert_eq!(period.net_change, dec!(0));
        assert_eq!(period.closing, dec!(42));
    }
}

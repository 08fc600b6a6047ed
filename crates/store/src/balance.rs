//! Read-side balance queries.

use arca_core::ledger::{LedgerRow, PeriodBalance};
use arca_core::LedgerError;
use arca_shared::types::{AccountId, TenantId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::LedgerStore;

/// Computes account balances and period summaries from the general ledger.
///
/// Everything here is derived from ledger rows on demand; the cached
/// `current_balance` on accounts is a convenience the poster maintains, not
/// the source of truth.
#[derive(Debug, Clone)]
pub struct BalanceCalculator {
    store: LedgerStore,
}

impl BalanceCalculator {
    /// Creates a calculator over the given store.
    #[must_use]
    pub fn new(store: &LedgerStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Computes an account's balance, optionally as of a date (inclusive).
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn balance(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        as_of: Option<NaiveDate>,
    ) -> Result<Decimal, LedgerError> {
        self.store.read(|state| {
            let account = state.account(tenant_id, account_id)?;
            let (debits, credits) = state.ledger_sums(account_id, None, as_of);
            Ok(account.normal_balance.balance_change(debits, credits))
        })
    }

    /// Computes an account's opening balance, period activity, and closing
    /// balance over an inclusive date range.
    ///
    /// The opening balance is the balance as of the day before `start`; a
    /// `start` at the calendar's lower bound opens at zero.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn period_balance(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodBalance, LedgerError> {
        self.store.read(|state| {
            let account = state.account(tenant_id, account_id)?;

            let opening = match start.pred_opt() {
                Some(day_before) => {
                    let (debits, credits) = state.ledger_sums(account_id, None, Some(day_before));
                    account.normal_balance.balance_change(debits, credits)
                }
                None => Decimal::ZERO,
            };

            let (debits, credits) = state.ledger_sums(account_id, Some(start), Some(end));
            Ok(PeriodBalance::from_sums(
                account.normal_balance,
                opening,
                debits,
                credits,
            ))
        })
    }

    /// Returns an account's general ledger rows in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn ledger_rows(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<Vec<LedgerRow>, LedgerError> {
        self.store.read(|state| {
            state.account(tenant_id, account_id)?;
            Ok(state
                .general_ledger
                .iter()
                .filter(|row| row.account_id == account_id)
                .cloned()
                .collect())
        })
    }
}

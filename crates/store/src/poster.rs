//! Posting journal entries to the general ledger.

use std::collections::BTreeSet;

use arca_core::journal::JournalEntry;
use arca_core::ledger::LedgerRow;
use arca_core::LedgerError;
use arca_shared::types::AccountId;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::state::StoreState;

/// Writes the general ledger rows for a journal entry.
///
/// Only [`crate::JournalEntryManager::post`] calls this, after the entry has
/// passed posting validation, so ledger rows always originate from a
/// balanced, validated entry.
pub(crate) struct LedgerPoster;

impl LedgerPoster {
    /// Appends one ledger row per entry line and refreshes the cached
    /// balance of every touched account.
    ///
    /// Each row's running balance continues from the latest row of the same
    /// account dated on or before the entry date, ordered by
    /// `(transaction_date, id)`. Rows already recorded with later dates are
    /// never rewritten; a backdated posting starts a parallel reading that
    /// the refreshed `current_balance` reconciles.
    pub(crate) fn post_entry(
        state: &mut StoreState,
        entry: &JournalEntry,
    ) -> Result<(), LedgerError> {
        let mut touched: BTreeSet<AccountId> = BTreeSet::new();

        for line in &entry.lines {
            let account = state
                .accounts
                .get(&line.account_id)
                .filter(|a| a.tenant_id == entry.tenant_id)
                .ok_or(LedgerError::AccountNotFound(line.account_id))?;
            let normal_balance = account.normal_balance;

            let previous_balance = state
                .general_ledger
                .iter()
                .filter(|row| row.account_id == line.account_id)
                .filter(|row| row.transaction_date <= entry.entry_date)
                .max_by_key(|row| (row.transaction_date, row.id))
                .map_or(Decimal::ZERO, |row| row.running_balance);

            let change = normal_balance.balance_change(line.debit_amount, line.credit_amount);

            let row = LedgerRow {
                id: state.next_row_id(),
                account_id: line.account_id,
                journal_entry_id: entry.id,
                journal_entry_line_id: line.id,
                transaction_date: entry.entry_date,
                debit_amount: line.debit_amount,
                credit_amount: line.credit_amount,
                running_balance: previous_balance + change,
            };
            state.general_ledger.push(row);
            touched.insert(line.account_id);
        }

        for account_id in touched {
            Self::refresh_balance(state, account_id)?;
        }

        Ok(())
    }

    /// Recomputes an account's cached balance from its full ledger history.
    pub(crate) fn refresh_balance(
        state: &mut StoreState,
        account_id: AccountId,
    ) -> Result<Decimal, LedgerError> {
        let account = state
            .accounts
            .get(&account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        let normal_balance = account.normal_balance;

        let (debits, credits) = state.ledger_sums(account_id, None, None);
        let balance = normal_balance.balance_change(debits, credits);

        let account = state
            .accounts
            .get_mut(&account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        account.current_balance = balance;
        account.updated_at = Utc::now();

        tracing::debug!(account = %account_id, %balance, "refreshed account balance");

        Ok(balance)
    }
}

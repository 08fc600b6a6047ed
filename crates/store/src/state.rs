//! In-memory ledger state.
//!
//! One value of [`StoreState`] holds every table the ledger owns. Mutations
//! always go through [`crate::LedgerStore::commit`], which clones this state,
//! so the struct stays `Clone` and keeps no interior mutability.

use std::collections::BTreeMap;

use arca_core::chart::Account;
use arca_core::journal::JournalEntry;
use arca_core::ledger::{LedgerRow, LedgerRowId};
use arca_core::LedgerError;
use arca_shared::types::{AccountId, JournalEntryId, TenantId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Key for a per-tenant, per-month entry-number counter.
pub(crate) type CounterKey = (TenantId, i32, u32);

/// The ledger's tables.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    /// Chart of accounts, across all tenants.
    pub(crate) accounts: BTreeMap<AccountId, Account>,
    /// Journal entries (each owning its lines).
    pub(crate) entries: BTreeMap<JournalEntryId, JournalEntry>,
    /// Append-only general ledger, in insertion order.
    pub(crate) general_ledger: Vec<LedgerRow>,
    /// Entry-number counters holding the last issued sequence per period.
    pub(crate) entry_counters: BTreeMap<CounterKey, u32>,
    /// Next general ledger row id.
    next_row_id: u64,
}

impl StoreState {
    /// Issues the next ledger row id.
    pub(crate) fn next_row_id(&mut self) -> LedgerRowId {
        self.next_row_id += 1;
        LedgerRowId(self.next_row_id)
    }

    /// Looks up an account scoped to a tenant.
    ///
    /// An account belonging to another tenant is reported as not found
    /// rather than leaking its existence.
    pub(crate) fn account(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&account_id)
            .filter(|account| account.tenant_id == tenant_id)
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Looks up an account scoped to a tenant, mutably.
    pub(crate) fn account_mut(
        &mut self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&account_id)
            .filter(|account| account.tenant_id == tenant_id)
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Looks up a journal entry scoped to a tenant.
    pub(crate) fn entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
    ) -> Result<&JournalEntry, LedgerError> {
        self.entries
            .get(&entry_id)
            .filter(|entry| entry.tenant_id == tenant_id)
            .ok_or(LedgerError::EntryNotFound(entry_id))
    }

    /// Iterates the direct children of an account.
    pub(crate) fn children_of(
        &self,
        parent_id: AccountId,
    ) -> impl Iterator<Item = &Account> + '_ {
        self.accounts
            .values()
            .filter(move |account| account.parent_id == Some(parent_id))
    }

    /// Returns true if any ledger row references the account.
    pub(crate) fn account_has_rows(&self, account_id: AccountId) -> bool {
        self.general_ledger
            .iter()
            .any(|row| row.account_id == account_id)
    }

    /// Sums an account's ledger debits and credits over an inclusive date
    /// range; `None` bounds are open.
    pub(crate) fn ledger_sums(
        &self,
        account_id: AccountId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> (Decimal, Decimal) {
        let mut debits = Decimal::ZERO;
        let mut credits = Decimal::ZERO;

        for row in self
            .general_ledger
            .iter()
            .filter(|row| row.account_id == account_id)
            .filter(|row| from.is_none_or(|d| row.transaction_date >= d))
            .filter(|row| to.is_none_or(|d| row.transaction_date <= d))
        {
            debits += row.debit_amount;
            credits += row.credit_amount;
        }

        (debits, credits)
    }
}

//! Append-only general ledger rows.

use arca_shared::types::{AccountId, JournalEntryId, JournalLineId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sequential identifier for a general ledger row.
///
/// Rows are identified by insertion sequence, which also breaks ordering
/// ties between rows sharing a transaction date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerRowId(pub u64);

impl std::fmt::Display for LedgerRowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row in the general ledger.
///
/// Rows are created only when a journal entry is posted and are never
/// mutated or deleted afterward. Within one account they form a chain
/// totally ordered by `(transaction_date, id)`.
///
/// `running_balance` is authoritative as of the row's own posting time:
/// posting an earlier-dated entry later does not rewrite the running
/// balances of rows already recorded with later dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Insertion-sequence identifier.
    pub id: LedgerRowId,
    /// The account this row belongs to.
    pub account_id: AccountId,
    /// The journal entry that produced this row.
    pub journal_entry_id: JournalEntryId,
    /// The journal line that produced this row.
    pub journal_entry_line_id: JournalLineId,
    /// The entry's accounting date.
    pub transaction_date: NaiveDate,
    /// Debit amount.
    pub debit_amount: Decimal,
    /// Credit amount.
    pub credit_amount: Decimal,
    /// The account's cumulative balance after this row.
    pub running_balance: Decimal,
}

//! Journal entry aggregate and lifecycle types.

use arca_shared::types::{AccountId, JournalEntryId, JournalLineId, TenantId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Journal entry status.
///
/// Entries progress draft → posted → reversed. Posted entries are immutable
/// except for the single transition to reversed; reversed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalStatus {
    /// Entry is being drafted and can be modified or deleted.
    Draft,
    /// Entry has been posted to the general ledger (immutable).
    Posted,
    /// Entry has been reversed by a mirror entry (terminal).
    Reversed,
}

impl JournalStatus {
    /// Returns true if the entry can be modified or deleted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the entry is immutable.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Posted | Self::Reversed)
    }
}

/// Journal entry type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalEntryType {
    /// Entry keyed in by hand.
    Manual,
    /// Entry generated by a host business event (invoice, payment, ...).
    Automatic,
    /// Adjustment entry.
    Adjustment,
    /// Period-closing entry.
    Closing,
    /// Mirror entry nullifying a previously posted entry.
    Reversal,
}

/// Kind of business document that originated a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Sales invoice issued.
    Invoice,
    /// Payment received or made.
    Payment,
    /// Manually keyed entry, no originating document.
    Manual,
    /// Adjustment raised by the host.
    Adjustment,
    /// Period-closing run.
    Closing,
}

/// Tagged reference to the originating business document.
///
/// The ledger stores and returns this opaquely; resolution is entirely the
/// host application's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySource {
    /// The kind of originating document.
    pub kind: SourceKind,
    /// The originating document's identifier, if any.
    pub id: Option<Uuid>,
}

impl EntrySource {
    /// A manual entry with no originating document.
    #[must_use]
    pub const fn manual() -> Self {
        Self {
            kind: SourceKind::Manual,
            id: None,
        }
    }
}

/// A single line in a journal entry.
///
/// Per standard bookkeeping exactly one of `debit_amount`/`credit_amount`
/// is non-zero; both-zero informational lines are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier.
    pub id: JournalLineId,
    /// The account this line posts to.
    pub account_id: AccountId,
    /// Optional line description.
    pub description: Option<String>,
    /// Debit amount (zero if this is a credit line).
    pub debit_amount: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit_amount: Decimal,
    /// Optional line reference.
    pub reference: Option<String>,
}

/// A journal entry: a balanced set of lines with lifecycle and audit fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Tenant this entry belongs to.
    pub tenant_id: TenantId,
    /// Human-readable sequential number, assigned at posting.
    pub entry_number: Option<String>,
    /// Accounting date of the entry.
    pub entry_date: NaiveDate,
    /// Optional reference (e.g. invoice number).
    pub reference: Option<String>,
    /// Entry description.
    pub description: String,
    /// Sum of line debit amounts.
    pub total_debit: Decimal,
    /// Sum of line credit amounts.
    pub total_credit: Decimal,
    /// Current lifecycle status.
    pub status: JournalStatus,
    /// Entry type classification.
    pub entry_type: JournalEntryType,
    /// Originating business document.
    pub source: EntrySource,
    /// User who created the entry.
    pub created_by: UserId,
    /// User who posted the entry.
    pub approved_by: Option<UserId>,
    /// User who reversed the entry.
    pub reversed_by: Option<UserId>,
    /// The entry that reverses this one.
    pub reversal_entry_id: Option<JournalEntryId>,
    /// When the entry was posted.
    pub posted_at: Option<DateTime<Utc>>,
    /// When the entry was reversed.
    pub reversed_at: Option<DateTime<Utc>>,
    /// Why the entry was reversed.
    pub reversal_reason: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
    /// The entry's lines, in insertion order.
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Returns true if the entry can be edited or deleted.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    /// Returns true if the entry can be posted.
    #[must_use]
    pub fn can_post(&self) -> bool {
        self.status == JournalStatus::Draft
    }

    /// Returns true if the entry can be reversed.
    ///
    /// Only posted entries without an existing reversal qualify.
    #[must_use]
    pub fn can_reverse(&self) -> bool {
        self.status == JournalStatus::Posted && self.reversal_entry_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_editable() {
        assert!(JournalStatus::Draft.is_editable());
        assert!(!JournalStatus::Posted.is_editable());
        assert!(!JournalStatus::Reversed.is_editable());
    }

    #[test]
    fn test_status_immutable() {
        assert!(!JournalStatus::Draft.is_immutable());
        assert!(JournalStatus::Posted.is_immutable());
        assert!(JournalStatus::Reversed.is_immutable());
    }

    #[test]
    fn test_lifecycle_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&JournalStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&JournalEntryType::Reversal).unwrap(),
            "\"reversal\""
        );
        assert_eq!(
            serde_json::to_string(&SourceKind::Invoice).unwrap(),
            "\"invoice\""
        );
    }
}

//! Journal entry domain logic.
//!
//! This module implements the entry side of the ledger:
//! - The journal entry aggregate and its draft → posted → reversed lifecycle
//! - Input contracts for creating and editing entries
//! - Business rule validation for posting
//! - Reversal construction (mirrored entries)
//! - Entry-number formatting

pub mod entry;
pub mod numbering;
pub mod reversal;
pub mod types;
pub mod validation;

pub use entry::{EntrySource, JournalEntry, JournalEntryType, JournalLine, JournalStatus, SourceKind};
pub use types::{CreateEntryInput, EntryUpdate, LineInput};
pub use validation::{calculate_totals, validate_lines, validate_postable, AccountFlags, EntryTotals};

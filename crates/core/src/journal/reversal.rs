//! Reversal construction for posted journal entries.
//!
//! Reversing an entry never deletes history: a mirror entry with debits and
//! credits swapped is created and posted, nullifying the original's effect.

use arca_shared::types::UserId;

use super::entry::{JournalEntry, JournalEntryType, JournalLine};
use super::types::{CreateEntryInput, LineInput};

/// Prefix applied to the description of a reversal entry.
pub const REVERSAL_PREFIX: &str = "REVERSAL: ";

/// Builds the mirror lines for a reversal: each line's debit and credit
/// amounts are swapped, everything else carries over.
#[must_use]
pub fn mirrored_lines(lines: &[JournalLine]) -> Vec<LineInput> {
    lines
        .iter()
        .map(|line| LineInput {
            account_id: line.account_id,
            description: line.description.clone(),
            debit_amount: line.credit_amount,
            credit_amount: line.debit_amount,
            reference: line.reference.clone(),
        })
        .collect()
}

/// Builds the create input for the entry that reverses `original`.
///
/// The reversal keeps the original's reference, source, and entry date, and
/// prefixes the description with [`REVERSAL_PREFIX`].
#[must_use]
pub fn reversal_input(original: &JournalEntry, actor: UserId) -> CreateEntryInput {
    CreateEntryInput {
        tenant_id: original.tenant_id,
        entry_date: original.entry_date,
        reference: original.reference.clone(),
        description: format!("{REVERSAL_PREFIX}{}", original.description),
        entry_type: JournalEntryType::Reversal,
        source: original.source,
        lines: mirrored_lines(&original.lines),
        created_by: actor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::entry::{EntrySource, JournalStatus};
    use crate::journal::validation::calculate_totals;
    use arca_shared::types::{AccountId, JournalEntryId, JournalLineId, TenantId};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_line(debit: Decimal, credit: Decimal) -> JournalLine {
        JournalLine {
            id: JournalLineId::new(),
            account_id: AccountId::new(),
            description: Some("line".to_string()),
            debit_amount: debit,
            credit_amount: credit,
            reference: None,
        }
    }

    fn make_posted_entry(lines: Vec<JournalLine>) -> JournalEntry {
        let totals = calculate_totals(&lines);
        let now = Utc::now();
        JournalEntry {
            id: JournalEntryId::new(),
            tenant_id: TenantId::new(),
            entry_number: Some("JE-202601-000001".to_string()),
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            reference: Some("INV-42".to_string()),
            description: "Invoice issued".to_string(),
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            status: JournalStatus::Posted,
            entry_type: JournalEntryType::Automatic,
            source: EntrySource::manual(),
            created_by: arca_shared::types::UserId::new(),
            approved_by: None,
            reversed_by: None,
            reversal_entry_id: None,
            posted_at: Some(now),
            reversed_at: None,
            reversal_reason: None,
            created_at: now,
            updated_at: now,
            lines,
        }
    }

    #[test]
    fn test_mirrored_lines_swap_sides() {
        let lines = vec![make_line(dec!(100), dec!(0)), make_line(dec!(0), dec!(100))];
        let mirrored = mirrored_lines(&lines);

        assert_eq!(mirrored[0].debit_amount, dec!(0));
        assert_eq!(mirrored[0].credit_amount, dec!(100));
        assert_eq!(mirrored[1].debit_amount, dec!(100));
        assert_eq!(mirrored[1].credit_amount, dec!(0));
    }

    #[test]
    fn test_mirrored_lines_preserve_accounts_and_descriptions() {
        let lines = vec![make_line(dec!(75), dec!(0))];
        let mirrored = mirrored_lines(&lines);

        assert_eq!(mirrored[0].account_id, lines[0].account_id);
        assert_eq!(mirrored[0].description, lines[0].description);
    }

    #[test]
    fn test_reversal_input_swaps_totals() {
        let entry = make_posted_entry(vec![
            make_line(dec!(1000), dec!(0)),
            make_line(dec!(0), dec!(1000)),
        ]);
        let actor = arca_shared::types::UserId::new();

        let input = reversal_input(&entry, actor);
        let totals = calculate_totals(&input.lines);

        assert_eq!(totals.total_debit, entry.total_credit);
        assert_eq!(totals.total_credit, entry.total_debit);
        assert_eq!(input.entry_type, JournalEntryType::Reversal);
        assert_eq!(input.entry_date, entry.entry_date);
        assert_eq!(input.reference, entry.reference);
        assert_eq!(input.created_by, actor);
        assert!(input.description.starts_with(REVERSAL_PREFIX));
        assert!(input.description.contains("Invoice issued"));
    }
}

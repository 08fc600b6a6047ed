//! Sequential journal entry numbers.

use arca_core::journal::numbering::{format_entry_number, parse_sequence};
use arca_shared::types::TenantId;

use crate::state::StoreState;

/// Issues gap-free entry numbers per tenant per calendar month.
///
/// Counters live in the store state and are bumped inside the same commit
/// that posts the entry, so two concurrent postings can never observe the
/// same sequence. A counter missing for a period (e.g. after loading
/// pre-existing entries) is seeded by scanning the entry numbers already
/// issued for that period.
pub(crate) struct EntryNumberGenerator;

impl EntryNumberGenerator {
    /// Returns the next entry number for the tenant and period.
    pub(crate) fn next(
        state: &mut StoreState,
        prefix: &str,
        tenant_id: TenantId,
        year: i32,
        month: u32,
    ) -> String {
        let key = (tenant_id, year, month);
        let last = state
            .entry_counters
            .get(&key)
            .copied()
            .unwrap_or_else(|| Self::seed(state, prefix, tenant_id, year, month));

        let sequence = last + 1;
        state.entry_counters.insert(key, sequence);
        format_entry_number(prefix, year, month, sequence)
    }

    /// Derives the last issued sequence for a period from stored entries.
    fn seed(state: &StoreState, prefix: &str, tenant_id: TenantId, year: i32, month: u32) -> u32 {
        state
            .entries
            .values()
            .filter(|entry| entry.tenant_id == tenant_id)
            .filter_map(|entry| entry.entry_number.as_deref())
            .filter_map(|number| parse_sequence(prefix, year, month, number))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_start_at_one_and_increment() {
        let mut state = StoreState::default();
        let tenant = TenantId::new();

        assert_eq!(
            EntryNumberGenerator::next(&mut state, "JE", tenant, 2026, 1),
            "JE-202601-000001"
        );
        assert_eq!(
            EntryNumberGenerator::next(&mut state, "JE", tenant, 2026, 1),
            "JE-202601-000002"
        );
    }

    #[test]
    fn test_periods_are_independent() {
        let mut state = StoreState::default();
        let tenant = TenantId::new();

        EntryNumberGenerator::next(&mut state, "JE", tenant, 2026, 1);
        assert_eq!(
            EntryNumberGenerator::next(&mut state, "JE", tenant, 2026, 2),
            "JE-202602-000001"
        );
    }

    #[test]
    fn test_tenants_are_independent() {
        let mut state = StoreState::default();
        let first = TenantId::new();
        let second = TenantId::new();

        EntryNumberGenerator::next(&mut state, "JE", first, 2026, 1);
        assert_eq!(
            EntryNumberGenerator::next(&mut state, "JE", second, 2026, 1),
            "JE-202601-000001"
        );
    }
}

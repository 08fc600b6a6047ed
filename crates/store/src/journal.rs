//! Journal entry lifecycle management.

use arca_core::journal::reversal::reversal_input;
use arca_core::journal::validation::AccountFlags;
use arca_core::journal::{
    calculate_totals, validate_lines, validate_postable, CreateEntryInput, EntryUpdate,
    JournalEntry, JournalEntryType, JournalLine, JournalStatus,
};
use arca_core::LedgerError;
use arca_shared::types::{JournalEntryId, JournalLineId, TenantId, UserId};
use arca_shared::LedgerConfig;
use chrono::{Datelike, Utc};

use crate::numbering::EntryNumberGenerator;
use crate::poster::LedgerPoster;
use crate::state::StoreState;
use crate::LedgerStore;

/// Manages the draft → posted → reversed lifecycle of journal entries.
///
/// Drafts can be edited and deleted freely. Posting validates the entry,
/// assigns its number, and writes the general ledger rows in one atomic
/// commit; from then on the entry is immutable and its effect can only be
/// undone by reversing it.
#[derive(Debug, Clone)]
pub struct JournalEntryManager {
    store: LedgerStore,
    config: LedgerConfig,
}

impl JournalEntryManager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new(store: &LedgerStore) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn with_config(store: &LedgerStore, config: LedgerConfig) -> Self {
        Self {
            store: store.clone(),
            config,
        }
    }

    /// Creates a draft journal entry.
    ///
    /// Lines are validated for shape only (non-negative amounts, one side
    /// per line); balance and account checks happen at posting, so drafts
    /// may be saved imbalanced.
    ///
    /// # Errors
    ///
    /// Returns `NoLines`, `NegativeAmount`, or `LineBothSides`.
    pub fn create(&self, input: CreateEntryInput) -> Result<JournalEntry, LedgerError> {
        self.store.commit(|state| Self::create_on(state, input))
    }

    /// Creates a draft entry from host-supplied template data, forcing the
    /// automatic entry type.
    ///
    /// Convenience for automatic posting flows (invoices, payments) that
    /// build their lines programmatically.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    pub fn create_from_template(
        &self,
        input: CreateEntryInput,
    ) -> Result<JournalEntry, LedgerError> {
        self.create(CreateEntryInput {
            entry_type: JournalEntryType::Automatic,
            ..input
        })
    }

    fn create_on(state: &mut StoreState, input: CreateEntryInput) -> Result<JournalEntry, LedgerError> {
        validate_lines(&input.lines)?;
        let totals = calculate_totals(&input.lines);

        let now = Utc::now();
        let lines: Vec<JournalLine> = input
            .lines
            .into_iter()
            .map(|line| JournalLine {
                id: JournalLineId::new(),
                account_id: line.account_id,
                description: line.description,
                debit_amount: line.debit_amount,
                credit_amount: line.credit_amount,
                reference: line.reference,
            })
            .collect();

        let entry = JournalEntry {
            id: JournalEntryId::new(),
            tenant_id: input.tenant_id,
            entry_number: None,
            entry_date: input.entry_date,
            reference: input.reference,
            description: input.description,
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            status: JournalStatus::Draft,
            entry_type: input.entry_type,
            source: input.source,
            created_by: input.created_by,
            approved_by: None,
            reversed_by: None,
            reversal_entry_id: None,
            posted_at: None,
            reversed_at: None,
            reversal_reason: None,
            created_at: now,
            updated_at: now,
            lines,
        };

        tracing::info!(entry = %entry.id, "journal entry created");

        state.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    /// Fetches a journal entry.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound`.
    pub fn get(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
    ) -> Result<JournalEntry, LedgerError> {
        self.store
            .read(|state| state.entry(tenant_id, entry_id).cloned())
    }

    /// Lists a tenant's journal entries ordered by creation time.
    #[must_use]
    pub fn list(&self, tenant_id: TenantId) -> Vec<JournalEntry> {
        self.store.read(|state| {
            let mut entries: Vec<JournalEntry> = state
                .entries
                .values()
                .filter(|entry| entry.tenant_id == tenant_id)
                .cloned()
                .collect();
            entries.sort_by_key(|entry| entry.created_at);
            entries
        })
    }

    /// Applies changes to a draft entry.
    ///
    /// Replacing the lines revalidates their shape and recomputes totals.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound`, `InvalidStateTransition` for non-draft
    /// entries, or a line validation error.
    pub fn edit(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        update: EntryUpdate,
    ) -> Result<JournalEntry, LedgerError> {
        self.store.commit(|state| {
            let entry = state.entry(tenant_id, entry_id)?;
            if !entry.is_editable() {
                return Err(LedgerError::InvalidStateTransition {
                    operation: "edit",
                    status: entry.status,
                });
            }
            let mut entry = entry.clone();

            if let Some(entry_date) = update.entry_date {
                entry.entry_date = entry_date;
            }
            if let Some(reference) = update.reference {
                entry.reference = reference;
            }
            if let Some(description) = update.description {
                entry.description = description;
            }
            if let Some(lines) = update.lines {
                validate_lines(&lines)?;
                let totals = calculate_totals(&lines);
                entry.total_debit = totals.total_debit;
                entry.total_credit = totals.total_credit;
                entry.lines = lines
                    .into_iter()
                    .map(|line| JournalLine {
                        id: JournalLineId::new(),
                        account_id: line.account_id,
                        description: line.description,
                        debit_amount: line.debit_amount,
                        credit_amount: line.credit_amount,
                        reference: line.reference,
                    })
                    .collect();
            }
            entry.updated_at = Utc::now();

            state.entries.insert(entry.id, entry.clone());
            Ok(entry)
        })
    }

    /// Deletes a draft entry.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound`, or `InvalidStateTransition` for non-draft
    /// entries.
    pub fn delete(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
    ) -> Result<(), LedgerError> {
        self.store.commit(|state| {
            let entry = state.entry(tenant_id, entry_id)?;
            if !entry.is_editable() {
                return Err(LedgerError::InvalidStateTransition {
                    operation: "delete",
                    status: entry.status,
                });
            }
            state.entries.remove(&entry_id);
            tracing::info!(entry = %entry_id, "journal entry deleted");
            Ok(())
        })
    }

    /// Posts a draft entry to the general ledger.
    ///
    /// Validation, number assignment, status change, and ledger row writes
    /// happen in one commit; any failure leaves the entry untouched and the
    /// ledger without partial rows.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound`, `InvalidStateTransition` for non-draft
    /// entries, or a posting validation error (`InsufficientLines`,
    /// `ImbalancedEntry`, `AccountNotFound`, `AccountInactive`,
    /// `AccountLocked`).
    pub fn post(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        actor: UserId,
    ) -> Result<JournalEntry, LedgerError> {
        self.store
            .commit(|state| self.post_on(state, tenant_id, entry_id, actor))
    }

    fn post_on(
        &self,
        state: &mut StoreState,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        actor: UserId,
    ) -> Result<JournalEntry, LedgerError> {
        let mut entry = state.entry(tenant_id, entry_id)?.clone();
        if !entry.can_post() {
            return Err(LedgerError::InvalidStateTransition {
                operation: "post",
                status: entry.status,
            });
        }

        validate_postable(&entry.lines, self.config.balance_tolerance, |account_id| {
            let account = state.account(tenant_id, account_id)?;
            Ok(AccountFlags {
                id: account.id,
                is_active: account.is_active,
                accepts_entries: account.accepts_entries,
                is_parent: account.is_parent,
            })
        })?;

        if entry.entry_number.is_none() {
            entry.entry_number = Some(EntryNumberGenerator::next(
                state,
                &self.config.entry_number_prefix,
                tenant_id,
                entry.created_at.year(),
                entry.created_at.month(),
            ));
        }

        let now = Utc::now();
        entry.status = JournalStatus::Posted;
        entry.approved_by = Some(actor);
        entry.posted_at = Some(now);
        entry.updated_at = now;

        LedgerPoster::post_entry(state, &entry)?;
        state.entries.insert(entry.id, entry.clone());

        tracing::info!(
            entry = %entry.id,
            number = entry.entry_number.as_deref().unwrap_or_default(),
            "journal entry posted"
        );

        Ok(entry)
    }

    /// Reverses a posted entry by creating and posting a mirror entry.
    ///
    /// The mirror swaps every line's debit and credit, carries the
    /// original's entry date, and goes through the full posting path. The
    /// original transitions to reversed and records the reason and the link
    /// to its reversal.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound`, or `InvalidStateTransition` when the entry
    /// is not posted or is already reversed.
    pub fn reverse(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        reason: impl Into<String>,
        actor: UserId,
    ) -> Result<JournalEntry, LedgerError> {
        let reason = reason.into();
        self.store.commit(|state| {
            let original = state.entry(tenant_id, entry_id)?.clone();
            if !original.can_reverse() {
                return Err(LedgerError::InvalidStateTransition {
                    operation: "reverse",
                    status: original.status,
                });
            }

            let draft = Self::create_on(state, reversal_input(&original, actor))?;
            let reversal = self.post_on(state, tenant_id, draft.id, actor)?;

            let now = Utc::now();
            let original = state
                .entries
                .get_mut(&entry_id)
                .ok_or(LedgerError::EntryNotFound(entry_id))?;
            original.status = JournalStatus::Reversed;
            original.reversed_by = Some(actor);
            original.reversed_at = Some(now);
            original.reversal_reason = Some(reason);
            original.reversal_entry_id = Some(reversal.id);
            original.updated_at = now;

            tracing::info!(
                entry = %entry_id,
                reversal = %reversal.id,
                "journal entry reversed"
            );

            Ok(reversal)
        })
    }
}

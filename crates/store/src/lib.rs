//! Stateful ledger engine for Arca.
//!
//! This crate owns the persisted ledger tables (chart of accounts, journal
//! entries, append-only general ledger) and exposes the components hosts
//! interact with:
//!
//! - [`ChartOfAccountStore`] - account hierarchy, code generation, cached balances
//! - [`JournalEntryManager`] - draft → posted → reversed entry lifecycle
//! - [`BalanceCalculator`] - read-side balance and period queries
//!
//! All mutating operations run through [`LedgerStore::commit`]: the mutation
//! executes on a cloned snapshot of the state and is swapped in only on
//! success, so a failure partway leaves no partial ledger rows and no
//! half-applied status change. The single writer lock also serializes
//! entry-number assignment and running-balance computation, which both read
//! the latest matching row before writing.

mod balance;
mod chart;
mod journal;
mod numbering;
mod poster;
mod state;

pub use balance::BalanceCalculator;
pub use chart::{ChartOfAccountStore, CreateAccountInput};
pub use journal::JournalEntryManager;

use std::sync::{Arc, PoisonError, RwLock};

use arca_core::LedgerError;
use state::StoreState;

/// Shared handle to the ledger state.
///
/// Cloning is cheap; all clones observe the same state. Reads see either the
/// pre- or post-commit state of any mutation, never an intermediate one.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    inner: Arc<RwLock<StoreState>>,
}

impl LedgerStore {
    /// Creates an empty ledger store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a read-only closure against the current state.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs a mutation as one atomic unit.
    ///
    /// The closure operates on a cloned snapshot; on `Ok` the snapshot
    /// replaces the live state, on `Err` it is dropped and the store is
    /// untouched.
    pub(crate) fn commit<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut staged = guard.clone();
        let value = f(&mut staged)?;
        *guard = staged;
        Ok(value)
    }
}

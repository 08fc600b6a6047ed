//! Chart of accounts storage.

use arca_core::chart::{next_child_code, own_segment, root_code, Account, AccountType};
use arca_core::LedgerError;
use arca_shared::types::{AccountId, TenantId};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::poster::LedgerPoster;
use crate::state::StoreState;
use crate::LedgerStore;

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// The tenant the account belongs to.
    pub tenant_id: TenantId,
    /// Explicit code; `None` generates the next code in the hierarchy.
    pub code: Option<String>,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Optional subtype for finer categorization.
    pub subtype: Option<String>,
    /// Parent account, if any.
    pub parent_id: Option<AccountId>,
    /// Whether journal lines may reference this account.
    pub accepts_entries: bool,
}

impl CreateAccountInput {
    /// A postable leaf account with a generated code.
    #[must_use]
    pub fn leaf(tenant_id: TenantId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            tenant_id,
            code: None,
            name: name.into(),
            account_type,
            subtype: None,
            parent_id: None,
            accepts_entries: true,
        }
    }
}

/// Manages the account hierarchy: creation, code generation, balance
/// queries, and deletion guards.
#[derive(Debug, Clone)]
pub struct ChartOfAccountStore {
    store: LedgerStore,
}

impl ChartOfAccountStore {
    /// Creates a chart handle over the given store.
    #[must_use]
    pub fn new(store: &LedgerStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Creates an account.
    ///
    /// With no explicit code the next hierarchical code is generated. A
    /// first child flips its parent's `is_parent` flag, locking the parent
    /// out of future postings.
    ///
    /// # Errors
    ///
    /// Returns `ParentNotFound`, `ParentTenantMismatch`, or `DuplicateCode`.
    pub fn create_account(&self, input: CreateAccountInput) -> Result<Account, LedgerError> {
        self.store.commit(|state| {
            let parent_code = match input.parent_id {
                Some(parent_id) => {
                    let parent = state
                        .accounts
                        .get(&parent_id)
                        .ok_or(LedgerError::ParentNotFound(parent_id))?;
                    if parent.tenant_id != input.tenant_id {
                        return Err(LedgerError::ParentTenantMismatch);
                    }
                    Some(parent.code.clone())
                }
                None => None,
            };

            let code = match input.code {
                Some(code) => code,
                None => Self::generate_code_on(
                    state,
                    input.tenant_id,
                    parent_code.as_deref(),
                    Some(input.account_type),
                ),
            };

            let duplicate = state
                .accounts
                .values()
                .any(|account| account.tenant_id == input.tenant_id && account.code == code);
            if duplicate {
                return Err(LedgerError::DuplicateCode(code));
            }

            let now = Utc::now();
            let account = Account {
                id: AccountId::new(),
                tenant_id: input.tenant_id,
                code,
                name: input.name,
                account_type: input.account_type,
                subtype: input.subtype,
                parent_id: input.parent_id,
                normal_balance: input.account_type.normal_balance(),
                accepts_entries: input.accepts_entries,
                is_parent: false,
                current_balance: Decimal::ZERO,
                is_active: true,
                created_at: now,
                updated_at: now,
            };

            if let Some(parent_id) = input.parent_id {
                let parent = state.account_mut(input.tenant_id, parent_id)?;
                if !parent.is_parent {
                    parent.is_parent = true;
                    parent.updated_at = now;
                }
            }

            tracing::info!(
                account = %account.id,
                code = %account.code,
                "account created"
            );

            state.accounts.insert(account.id, account.clone());
            Ok(account)
        })
    }

    /// Generates the next available code under `parent_id`, or the root
    /// code for the account type when no parent is given.
    ///
    /// # Errors
    ///
    /// Returns `ParentNotFound` if the parent does not exist.
    pub fn generate_code(
        &self,
        tenant_id: TenantId,
        parent_id: Option<AccountId>,
        account_type: Option<AccountType>,
    ) -> Result<String, LedgerError> {
        self.store.read(|state| {
            let parent_code = match parent_id {
                Some(parent_id) => Some(
                    state
                        .account(tenant_id, parent_id)
                        .map_err(|_| LedgerError::ParentNotFound(parent_id))?
                        .code
                        .clone(),
                ),
                None => None,
            };
            Ok(Self::generate_code_on(
                state,
                tenant_id,
                parent_code.as_deref(),
                account_type,
            ))
        })
    }

    fn generate_code_on(
        state: &StoreState,
        tenant_id: TenantId,
        parent_code: Option<&str>,
        account_type: Option<AccountType>,
    ) -> String {
        match parent_code {
            Some(parent_code) => {
                let siblings = state
                    .accounts
                    .values()
                    .filter(|account| account.tenant_id == tenant_id)
                    .map(|account| account.code.as_str());
                next_child_code(parent_code, siblings)
            }
            None => root_code(account_type).to_string(),
        }
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn get(&self, tenant_id: TenantId, account_id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .read(|state| state.account(tenant_id, account_id).cloned())
    }

    /// Fetches an account by code.
    #[must_use]
    pub fn find_by_code(&self, tenant_id: TenantId, code: &str) -> Option<Account> {
        self.store.read(|state| {
            state
                .accounts
                .values()
                .find(|account| account.tenant_id == tenant_id && account.code == code)
                .cloned()
        })
    }

    /// Lists a tenant's accounts ordered by code.
    #[must_use]
    pub fn list(&self, tenant_id: TenantId) -> Vec<Account> {
        self.store.read(|state| {
            let mut accounts: Vec<Account> = state
                .accounts
                .values()
                .filter(|account| account.tenant_id == tenant_id)
                .cloned()
                .collect();
            accounts.sort_by(|a, b| a.code.cmp(&b.code));
            accounts
        })
    }

    /// Composes the account's full dotted code from its ancestry.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account or an ancestor is missing.
    pub fn full_code(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<String, LedgerError> {
        self.store.read(|state| {
            let path = Self::ancestry(state, tenant_id, account_id)?;
            let segments: Vec<&str> = path
                .iter()
                .map(|(account, parent_code)| own_segment(&account.code, parent_code.as_deref()))
                .collect();
            Ok(segments.join("."))
        })
    }

    /// Composes the account's full name path, root first, joined by " > ".
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account or an ancestor is missing.
    pub fn full_name(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<String, LedgerError> {
        self.store.read(|state| {
            let path = Self::ancestry(state, tenant_id, account_id)?;
            let names: Vec<&str> = path
                .iter()
                .map(|(account, _)| account.name.as_str())
                .collect();
            Ok(names.join(" > "))
        })
    }

    /// Walks the parent chain, returning `(account, parent_code)` pairs
    /// ordered root first.
    fn ancestry(
        state: &StoreState,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<Vec<(Account, Option<String>)>, LedgerError> {
        let mut path = Vec::new();
        let mut current = Some(account_id);

        while let Some(id) = current {
            let account = state.account(tenant_id, id)?.clone();
            current = account.parent_id;
            let parent_code = match account.parent_id {
                Some(parent_id) => Some(state.account(tenant_id, parent_id)?.code.clone()),
                None => None,
            };
            path.push((account, parent_code));
        }

        path.reverse();
        Ok(path)
    }

    /// Computes an account's balance from the general ledger, optionally as
    /// of a date (inclusive).
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn calculate_balance(
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

    /// Recomputes and persists the account's cached `current_balance`.
    ///
    /// Posting refreshes the cache automatically; this is for hosts that
    /// want an explicit reconciliation point.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn update_balance(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<Decimal, LedgerError> {
        self.store.commit(|state| {
            state.account(tenant_id, account_id)?;
            LedgerPoster::refresh_balance(state, account_id)
        })
    }

    /// Activates or deactivates an account.
    ///
    /// Deactivation keeps the account and its history but blocks new
    /// postings against it.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn set_active(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        is_active: bool,
    ) -> Result<Account, LedgerError> {
        self.store.commit(|state| {
            let account = state.account_mut(tenant_id, account_id)?;
            account.is_active = is_active;
            account.updated_at = Utc::now();
            Ok(account.clone())
        })
    }

    /// Returns true if the account can be deleted: no ledger history and no
    /// child accounts.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`.
    pub fn can_delete(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<bool, LedgerError> {
        self.store.read(|state| {
            state.account(tenant_id, account_id)?;
            Ok(Self::deletable(state, account_id))
        })
    }

    fn deletable(state: &StoreState, account_id: AccountId) -> bool {
        !state.account_has_rows(account_id) && state.children_of(account_id).next().is_none()
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound`, or `AccountDeletion` if the account has
    /// ledger history or children.
    pub fn delete_account(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<(), LedgerError> {
        self.store.commit(|state| {
            state.account(tenant_id, account_id)?;
            if !Self::deletable(state, account_id) {
                return Err(LedgerError::AccountDeletion(account_id));
            }
            state.accounts.remove(&account_id);
            tracing::info!(account = %account_id, "account deleted");
            Ok(())
        })
    }
}

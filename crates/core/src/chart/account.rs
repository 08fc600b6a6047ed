//! Account domain types for the chart of accounts.

use arca_shared::types::{AccountId, TenantId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// The type determines the account's normal balance side:
/// assets and expenses are debit-normal, the rest are credit-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Revenue account (credit-normal).
    Revenue,
    /// Expense account (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns the normal balance side for this account type.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }
}

/// Which side increases an account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debits increase the balance (assets, expenses).
    Debit,
    /// Credits increase the balance (liabilities, equity, revenue).
    Credit,
}

impl NormalBalance {
    /// Calculates the signed balance change for a debit/credit pair.
    ///
    /// Debit-normal accounts gain `debit - credit`; credit-normal accounts
    /// gain `credit - debit`.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// An account in the chart of accounts.
///
/// Accounts are owned by the chart; `parent_id` is a navigational link, not
/// exclusive ownership. The cached `current_balance` is mutated only by the
/// ledger poster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Tenant this account belongs to.
    pub tenant_id: TenantId,
    /// Dotted hierarchical code, unique per tenant (e.g. "1.02").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Optional subtype for finer categorization.
    pub subtype: Option<String>,
    /// Parent account for hierarchical structure.
    pub parent_id: Option<AccountId>,
    /// Normal balance side (derived from `account_type` at creation).
    pub normal_balance: NormalBalance,
    /// Whether journal lines may reference this account.
    pub accepts_entries: bool,
    /// Whether this account has child accounts.
    pub is_parent: bool,
    /// Cached balance, refreshed by the ledger poster after every posting.
    pub current_balance: Decimal,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Returns true if journal lines may be posted against this account.
    ///
    /// Parent accounts and accounts flagged `accepts_entries = false` are
    /// structural only and may never carry ledger rows.
    #[must_use]
    pub fn is_postable(&self) -> bool {
        self.accepts_entries && !self.is_parent
    }
}

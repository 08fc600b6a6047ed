//! General ledger rows and balance math.

pub mod period;
pub mod row;

pub use period::PeriodBalance;
pub use row::{LedgerRow, LedgerRowId};

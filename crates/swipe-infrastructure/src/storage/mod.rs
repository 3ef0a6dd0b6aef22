//! File storage primitives.

mod ledger_file;

pub use ledger_file::{LedgerError, LedgerFile};

// Bankcheck - Bank account validation library
// Exposes all modules for use in the CLI and tests

pub mod account;
pub mod batch;
pub mod errors;
pub mod routing;

// Re-export commonly used types
pub use account::{
    digits_only, is_blank, BankAccount, ACCOUNT_TYPES, DEFAULT_ACCOUNT_TYPE, ECHECK_TYPES,
};
pub use batch::{load_csv, read_accounts, validate_all, BatchReport, RecordOutcome};
pub use errors::{Errors, Field, FieldKey};
pub use routing::checksum_valid;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use thiserror::Error;

use crate::AccountId;

/// Errors that can occur when interacting with the account store.
#[derive(Debug, Error)]
pub enum AccountStoreError {
    /// The account does not exist (e.g. it was deleted before an update landed).
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for account store operations.
pub type Result<T> = std::result::Result<T, AccountStoreError>;

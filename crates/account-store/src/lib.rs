//! Account persistence for the account service.
//!
//! Defines the [`AccountStore`] data-access trait with in-memory and
//! PostgreSQL implementations, plus the JSON contract for accounts.

pub mod account;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use account::{Account, AccountPayload, AccountValidationError, NewAccount};
pub use common::AccountId;
pub use error::{AccountStoreError, Result};
pub use memory::InMemoryAccountStore;
pub use postgres::PostgresAccountStore;
pub use store::AccountStore;

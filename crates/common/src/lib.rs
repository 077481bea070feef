//! Shared types for the account service.

mod types;

pub use types::AccountId;

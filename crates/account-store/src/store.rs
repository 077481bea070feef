use async_trait::async_trait;

use crate::{Account, AccountId, NewAccount, Result};

/// Data-access interface for accounts.
///
/// Every method is a single atomic operation against the backing store;
/// callers do no locking of their own. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a new account and returns it with its freshly assigned id.
    async fn create(&self, account: NewAccount) -> Result<Account>;

    /// Looks up an account by id.
    ///
    /// Returns None if no account has that id.
    async fn find(&self, id: AccountId) -> Result<Option<Account>>;

    /// Returns every stored account, ordered by id.
    async fn all(&self) -> Result<Vec<Account>>;

    /// Overwrites the stored fields of `account.id` with those of `account`.
    ///
    /// Fails with `NotFound` if the account no longer exists.
    async fn update(&self, account: Account) -> Result<Account>;

    /// Removes an account.
    ///
    /// Returns whether a record was removed. A missing id is not an error.
    async fn delete(&self, id: AccountId) -> Result<bool>;
}

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Account, AccountId, AccountStoreError, NewAccount, Result, store::AccountStore};

/// In-memory account store.
///
/// Provides the same interface as the PostgreSQL implementation. Ids start
/// at 1 and are never reused, even after a delete or `clear`.
#[derive(Clone)]
pub struct InMemoryAccountStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    next_id: AccountId,
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                accounts: BTreeMap::new(),
                next_id: AccountId::new(1),
            })),
        }
    }
}

impl InMemoryAccountStore {
    /// Creates a new empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of accounts stored.
    pub async fn account_count(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    /// Removes all accounts.
    pub async fn clear(&self) {
        self.inner.write().await.accounts.clear();
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id = id.next();

        let account = account.into_account(id);
        inner.accounts.insert(id, account.clone());
        tracing::debug!(%id, "stored account in memory");

        Ok(account)
    }

    async fn find(&self, id: AccountId) -> Result<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let mut inner = self.inner.write().await;
        match inner.accounts.get_mut(&account.id) {
            Some(stored) => {
                *stored = account.clone();
                Ok(account)
            }
            None => Err(AccountStoreError::NotFound(account.id)),
        }
    }

    async fn delete(&self, id: AccountId) -> Result<bool> {
        Ok(self.inner.write().await.accounts.remove(&id).is_some())
    }
}

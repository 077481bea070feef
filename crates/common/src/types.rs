use serde::{Deserialize, Serialize};

/// Identifier of a stored account.
///
/// Assigned by the backing store on creation and never changed afterwards.
/// Wraps the raw integer so ids can't be confused with other numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an account ID from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns the ID that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AccountId;

/// A stored account, as returned by the store and serialized on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned identifier.
    pub id: AccountId,

    pub name: String,

    pub email: Option<String>,

    pub address: String,

    pub phone_number: Option<String>,

    /// The day the account was opened.
    pub date_joined: NaiveDate,
}

impl Account {
    /// Replaces every client-supplied field with the payload's values.
    ///
    /// The id is never touched. `date_joined` is kept when the payload omits it.
    pub fn apply(&mut self, payload: AccountPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.address = payload.address;
        self.phone_number = payload.phone_number;
        if let Some(date_joined) = payload.date_joined {
            self.date_joined = date_joined;
        }
    }
}

/// Errors produced while turning a request body into an [`AccountPayload`].
#[derive(Debug, Error)]
pub enum AccountValidationError {
    /// The body is not JSON, has the wrong types, or lacks a required field.
    #[error("Invalid Account: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required text field is empty or whitespace.
    #[error("Invalid Account: {0} must not be blank")]
    Blank(&'static str),

    /// A text field is longer than its storage column allows.
    #[error("Invalid Account: {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Column widths of the `accounts` table, in characters.
pub const NAME_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 64;
pub const ADDRESS_MAX_LEN: usize = 256;
pub const PHONE_NUMBER_MAX_LEN: usize = 32;

fn check_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), AccountValidationError> {
    match value {
        Some(value) if value.chars().count() > max => {
            Err(AccountValidationError::TooLong { field, max })
        }
        _ => Ok(()),
    }
}

/// Client-supplied account fields.
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountPayload {
    pub name: String,
    pub email: Option<String>,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayload {
    /// Parses and validates a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, AccountValidationError> {
        let payload: Self = serde_json::from_slice(body)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Checks the field constraints serde can't express.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::Blank("name"));
        }
        if self.address.trim().is_empty() {
            return Err(AccountValidationError::Blank("address"));
        }
        check_len("name", Some(&self.name), NAME_MAX_LEN)?;
        check_len("email", self.email.as_deref(), EMAIL_MAX_LEN)?;
        check_len("address", Some(&self.address), ADDRESS_MAX_LEN)?;
        check_len("phone_number", self.phone_number.as_deref(), PHONE_NUMBER_MAX_LEN)?;
        Ok(())
    }
}

/// An account that has not been persisted yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: Option<String>,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl NewAccount {
    /// Attaches the id the store assigned.
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}

impl From<AccountPayload> for NewAccount {
    fn from(payload: AccountPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
            date_joined: payload
                .date_joined
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

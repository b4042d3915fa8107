//! Account identifier management.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Internal identifier of an account.
///
/// Assigned by the identity store on creation and immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Converts a raw store key into a valid [`AccountId`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is zero or negative.
    pub fn new(id: i64) -> Result<Self> {
        if id <= 0 {
            return Err(DomainError::InvalidAccountId(id));
        }

        Ok(Self(id))
    }

    /// Returns the raw value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_must_be_positive() {
        assert_eq!(AccountId::new(42).unwrap().get(), 42);
        assert_eq!(
            AccountId::new(0).unwrap_err(),
            DomainError::InvalidAccountId(0)
        );
        assert!(AccountId::try_from(-7).is_err());
    }

    #[test]
    fn test_account_id_serializes_as_integer() {
        let id = AccountId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(serde_json::from_str::<AccountId>("7").unwrap(), id);
    }

    #[test]
    fn test_account_id_deserialization_is_checked() {
        assert!(serde_json::from_str::<AccountId>("0").is_err());
        assert!(serde_json::from_str::<AccountId>("-1").is_err());
    }
}

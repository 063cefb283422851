//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of API resources.
//!
//! | Module | Resource path | Description |
//! |--------|---------------|-------------|
//! | `zones` | `/{account}/zones` | DNS zones |
//! | `zone_records` | `/{account}/zones/{zone}/records` | Records within a zone |
//! | `registrar` | `/{account}/registrar/domains/{domain}/transfers` | Inbound domain transfers |

pub mod registrar;
pub mod zone_records;
pub mod zones;

pub use registrar::{DomainTransfer, DomainTransferRequest, RegistrarApi};
pub use zone_records::Record;
pub use zones::{Zone, ZonesApi};

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Deserialize an explicit `null` as the field's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Account a request is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountId {
    /// A numeric account ID
    Id(u64),
    /// The account the credentials belong to
    Wildcard,
}

/// Shorthand for [`AccountId::Wildcard`]
pub const WILDCARD_ACCOUNT: AccountId = AccountId::Wildcard;

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Wildcard => f.write_str("_"),
        }
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display() {
        assert_eq!(AccountId::from(1010).to_string(), "1010");
        assert_eq!(WILDCARD_ACCOUNT.to_string(), "_");
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Flags {
        #[serde(deserialize_with = "null_as_default")]
        enabled: bool,
        #[serde(deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn test_null_as_default() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": null, "count": 3}"#).unwrap();
        assert!(!flags.enabled);
        assert_eq!(flags.count, 3);

        let flags: Flags = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(flags.enabled);
        assert_eq!(flags.count, 0);
    }
}

//! Strongly-typed identifiers for store rows
//!
//! The store keys every table with an integer. Newtype wrappers keep a claim
//! id from being passed where an application id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw store key
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                raw.parse::<i64>().map(Self).map_err(|_| {
                    CoreError::validation(format!("invalid {} identifier: '{}'", $prefix, s))
                })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(id: $name) -> serde_json::Value {
                serde_json::Value::from(id.0)
            }
        }
    };
}

define_id!(ClaimId, "CLM");
define_id!(InsuranceId, "INS");
define_id!(ApplicationId, "APP");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::new(42);
        assert_eq!(id.to_string(), "CLM-42");
    }

    #[test]
    fn test_id_parsing() {
        let original = ApplicationId::new(7);
        let parsed: ApplicationId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: ApplicationId = "7".parse().unwrap();
        assert_eq!(original, bare);
    }

    #[test]
    fn test_id_parsing_rejects_garbage() {
        assert!("CLM-abc".parse::<ClaimId>().is_err());
        assert!("".parse::<InsuranceId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = InsuranceId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: InsuranceId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}

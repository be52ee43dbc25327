//! Strongly typed identifiers
//!
//! Identifiers are assigned by the server, so they wrap the server's numeric
//! key rather than a locally generated value.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| crate::DomainError::invalid_id(stringify!($name), s))
            }
        }
    };
}

// Scope
define_id!(TenantId);

// Entities
define_id!(SpotId);
define_id!(SkillId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_bare_number() {
        assert_eq!(TenantId::new(3).to_string(), "3");
        assert_eq!(SpotId::new(42).to_string(), "42");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&SpotId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: SkillId = serde_json::from_str("11").unwrap();
        assert_eq!(id, SkillId::new(11));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(" 5 ".parse::<SpotId>().unwrap(), SpotId::new(5));

        let err = "front-desk".parse::<TenantId>().unwrap_err();
        assert!(err.to_string().contains("TenantId"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short prefix for compact list displays.
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(8) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

opaque_id!(
    /// Identifier of a rental request (externally assigned).
    RequestId
);
opaque_id!(
    /// Identifier of a deposit-withdrawal request.
    WithdrawalId
);
opaque_id!(
    /// Identifier of a tenant account.
    TenantId
);
opaque_id!(
    /// Identifier of a room.
    RoomId
);
opaque_id!(
    /// Identifier of an accommodation (building that groups rooms).
    AccommodationId
);
opaque_id!(
    /// Identifier of a signed-agreement confirmation record.
    ConfirmationId
);
opaque_id!(
    /// Identifier of a signed-agreement file.
    AgreementId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_truncates_long_ids() {
        let id = RequestId::new("64fa0c2e9b1d4a0012345678");
        assert_eq!(id.short(), "64fa0c2e");
    }

    #[test]
    fn test_short_keeps_small_ids() {
        let id = RequestId::new("abc");
        assert_eq!(id.short(), "abc");
    }

    #[test]
    fn test_serde_transparent() {
        let id: RoomId = serde_json::from_str("\"r-12\"").unwrap();
        assert_eq!(id.as_str(), "r-12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r-12\"");
    }
}

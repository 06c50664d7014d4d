//! User status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User account status.
///
/// The only transition is `Ativo -> Inativo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// User account is active.
    #[default]
    Ativo,
    /// User account has been deactivated.
    Inativo,
}

impl UserStatus {
    /// Checks if the account is considered active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Ativo)
    }

    /// Returns the wire/report label of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ativo => "ativo",
            Self::Inativo => "inativo",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_active() {
        assert!(UserStatus::Ativo.is_active());
        assert!(!UserStatus::Inativo.is_active());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(UserStatus::Ativo.to_string(), "ativo");
        assert_eq!(UserStatus::Inativo.to_string(), "inativo");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&UserStatus::Inativo).unwrap();
        assert_eq!(json, "\"inativo\"");
        let parsed: UserStatus = serde_json::from_str("\"ativo\"").unwrap();
        assert_eq!(parsed, UserStatus::Ativo);
    }

    #[test]
    fn test_status_default() {
        assert_eq!(UserStatus::default(), UserStatus::Ativo);
    }
}

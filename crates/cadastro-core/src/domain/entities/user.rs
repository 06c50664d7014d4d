//! User entity.

use super::super::value_objects::UserStatus;
use crate::{CadastroError, CadastroResult, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing one registered person.
///
/// Serialized with the record's original keys (`nome`, `idade`, `isAdmin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's name.
    #[serde(rename = "nome")]
    pub name: String,

    /// User's email address. Stored as given.
    pub email: String,

    /// User's age in years.
    #[serde(rename = "idade")]
    pub age: u32,

    /// Whether the user is an administrator. Fixed at creation.
    pub is_admin: bool,

    /// User's status.
    pub status: UserStatus,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Minimum age for a user to be registered.
    pub const MINIMUM_AGE: u32 = 18;

    /// Creates a new, active user with a fresh id.
    ///
    /// Input is assumed to be validated already.
    #[must_use]
    pub fn new(name: String, email: String, age: u32, is_admin: bool) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            age,
            is_admin,
            status: UserStatus::Ativo,
            created_at: Utc::now(),
        }
    }

    /// Checks if the user is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Checks if the user is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Deactivates the user account.
    ///
    /// Admins cannot be deactivated. Deactivating an inactive user is a no-op.
    pub fn deactivate(&mut self) -> CadastroResult<()> {
        if self.is_admin {
            return Err(CadastroError::business_rule(format!(
                "admin user {} cannot be deactivated",
                self.id
            )));
        }
        self.status = UserStatus::Inativo;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(is_admin: bool) -> User {
        User::new(
            "Fulano de Tal".to_string(),
            "fulano@teste.com".to_string(),
            25,
            is_admin,
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = sample(false);
        assert_eq!(user.status, UserStatus::Ativo);
        assert!(user.is_active());
        assert!(!user.is_admin());
        assert_eq!(user.name, "Fulano de Tal");
        assert_eq!(user.email, "fulano@teste.com");
        assert_eq!(user.age, 25);
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        assert_ne!(sample(false).id, sample(false).id);
    }

    #[test]
    fn test_deactivate_regular_user() {
        let mut user = sample(false);
        user.deactivate().unwrap();
        assert_eq!(user.status, UserStatus::Inativo);

        // second call keeps the user inactive
        user.deactivate().unwrap();
        assert_eq!(user.status, UserStatus::Inativo);
    }

    #[test]
    fn test_deactivate_admin_is_rejected() {
        let mut user = sample(true);
        let err = user.deactivate().unwrap_err();
        assert!(matches!(err, CadastroError::BusinessRule(_)));
        assert_eq!(user.status, UserStatus::Ativo);
    }

    #[test]
    fn test_serialization_uses_record_keys() {
        let user = sample(true);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["nome"], "Fulano de Tal");
        assert_eq!(json["email"], "fulano@teste.com");
        assert_eq!(json["idade"], 25);
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["status"], "ativo");
        assert!(json.get("createdAt").is_some());

        let parsed: User = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, user);
    }
}

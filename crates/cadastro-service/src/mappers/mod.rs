//! Entity-DTO mappers.

use crate::dto::CreateUserRequest;
use crate::report::ReportEntry;
use cadastro_core::User;

/// Builds a fresh, active user from a validated request.
impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        Self::new(request.nome, request.email, request.idade, request.is_admin)
    }
}

impl From<&User> for ReportEntry {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            status: user.status,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_core::UserStatus;

    #[test]
    fn test_request_to_user() {
        let user = User::from(CreateUserRequest::new("Admin", "admin@teste.com", 40).admin());
        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "admin@teste.com");
        assert_eq!(user.age, 40);
        assert!(user.is_admin);
        assert_eq!(user.status, UserStatus::Ativo);
    }

    #[test]
    fn test_user_to_report_entry() {
        let user = User::new("Bob".to_string(), "bob@email.com".to_string(), 32, false);
        let entry = ReportEntry::from(&user);
        assert_eq!(entry.id, user.id);
        assert_eq!(entry.name, "Bob");
        assert_eq!(entry.status, UserStatus::Ativo);
        assert!(!entry.is_admin);
    }
}

//! In-memory user repository implementation.

use crate::traits::{UserMutation, UserRepository};
use cadastro_core::{CadastroError, CadastroResult, User, UserId};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Insertion-ordered user records with an id index.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl UserStore {
    fn get(&self, id: UserId) -> Option<&User> {
        self.index.get(&id).map(|&pos| &self.users[pos])
    }

    fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.index.get(&id).map(|&pos| &mut self.users[pos])
    }

    fn insert(&mut self, user: User) -> CadastroResult<()> {
        if self.index.contains_key(&user.id) {
            return Err(CadastroError::conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        self.index.insert(user.id, self.users.len());
        self.users.push(user);
        Ok(())
    }

    fn clear(&mut self) {
        self.users.clear();
        self.index.clear();
    }
}

/// Process-local user repository.
///
/// A single lock guards the store, so writes are serialized.
#[derive(Component, Debug, Default)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(default)]
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Creates a new, empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored user.
    #[cfg(any(test, feature = "test-support"))]
    pub fn clear(&self) {
        debug!("Repository: clear");
        self.store.write().clear();
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: UserId) -> CadastroResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.store.read().get(id).cloned())
    }

    fn find_all(&self) -> CadastroResult<Vec<User>> {
        debug!("Repository: find_all");
        Ok(self.store.read().users.clone())
    }

    fn save(&self, user: &User) -> CadastroResult<User> {
        debug!("Repository: save {}", user.id);
        self.store.write().insert(user.clone())?;
        Ok(user.clone())
    }

    fn update_with(&self, id: UserId, mutation: UserMutation<'_>) -> CadastroResult<Option<User>> {
        debug!("Repository: update_with {}", id);
        let mut store = self.store.write();
        let Some(stored) = store.get_mut(id) else {
            return Ok(None);
        };

        let mut candidate = stored.clone();
        mutation(&mut candidate)?;
        *stored = candidate.clone();
        Ok(Some(candidate))
    }

    fn count(&self) -> CadastroResult<usize> {
        Ok(self.store.read().users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_core::UserStatus;

    fn create_test_user(name: &str, is_admin: bool) -> User {
        User::new(
            name.to_string(),
            format!("{}@teste.com", name.to_lowercase()),
            30,
            is_admin,
        )
    }

    #[test]
    fn test_save_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Alice", false);

        let saved = repo.save(&user).unwrap();
        assert_eq!(saved, user);

        let found = repo.find_by_id(user.id).unwrap().expect("user not found");
        assert_eq!(found.name, "Alice");
        assert!(repo.exists(user.id).unwrap());
    }

    #[test]
    fn test_find_by_id_not_found() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_id(UserId::new()).unwrap().is_none());
        assert!(!repo.exists(UserId::new()).unwrap());
    }

    #[test]
    fn test_save_duplicate_id_conflicts() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Alice", false);
        repo.save(&user).unwrap();

        let err = repo.save(&user).unwrap_err();
        assert!(matches!(err, CadastroError::Conflict(_)));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["Carla", "Alice", "Bob"] {
            repo.save(&create_test_user(name, false)).unwrap();
        }

        let names: Vec<String> = repo.find_all().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Carla", "Alice", "Bob"]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_update_with_applies_mutation() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Bob", false);
        repo.save(&user).unwrap();

        let updated = repo
            .update_with(user.id, &mut |u: &mut User| u.deactivate())
            .unwrap()
            .expect("user not found");
        assert_eq!(updated.status, UserStatus::Inativo);
        assert_eq!(
            repo.find_by_id(user.id).unwrap().map(|u| u.status),
            Some(UserStatus::Inativo)
        );
    }

    #[test]
    fn test_update_with_failed_mutation_leaves_record() {
        let repo = InMemoryUserRepository::new();
        let admin = create_test_user("Admin", true);
        repo.save(&admin).unwrap();

        let result = repo.update_with(admin.id, &mut |u: &mut User| {
            u.name = "changed".to_string();
            u.deactivate()
        });
        assert!(result.is_err());

        let stored = repo.find_by_id(admin.id).unwrap().unwrap();
        assert_eq!(stored.name, "Admin");
        assert_eq!(stored.status, UserStatus::Ativo);
    }

    #[test]
    fn test_update_with_unknown_id() {
        let repo = InMemoryUserRepository::new();
        let result = repo
            .update_with(UserId::new(), &mut |u: &mut User| u.deactivate())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_clear_empties_store() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Alice", false);
        repo.save(&user).unwrap();

        repo.clear();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_by_id(user.id).unwrap().is_none());

        // ids are free again after a clear
        repo.save(&user).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }
}

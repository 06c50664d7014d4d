//! Repository trait definitions.

use cadastro_core::{CadastroResult, Interface, User, UserId};

/// Callback applied to a stored user by [`UserRepository::update_with`].
pub type UserMutation<'a> = &'a mut dyn FnMut(&mut User) -> CadastroResult<()>;

/// User repository trait.
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    fn find_by_id(&self, id: UserId) -> CadastroResult<Option<User>>;

    /// Returns every stored user in insertion order.
    fn find_all(&self) -> CadastroResult<Vec<User>>;

    /// Saves a new user.
    ///
    /// Fails with a conflict if a user with the same id is already stored.
    fn save(&self, user: &User) -> CadastroResult<User>;

    /// Applies `mutation` to the stored user atomically.
    ///
    /// Returns `Ok(None)` when no user has the id. If `mutation` fails the
    /// stored record is left unchanged and the error is returned.
    fn update_with(&self, id: UserId, mutation: UserMutation<'_>) -> CadastroResult<Option<User>>;

    /// Checks if a user exists by ID.
    fn exists(&self, id: UserId) -> CadastroResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Counts all users.
    fn count(&self) -> CadastroResult<usize>;
}

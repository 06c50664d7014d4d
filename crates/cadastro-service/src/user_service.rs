//! User service trait definition.

use crate::dto::CreateUserRequest;
use crate::report::UserReport;
use cadastro_core::{CadastroResult, Interface, User, UserId};

/// User service trait.
///
/// Lookups that miss and blocked deactivations are reported as values
/// (`None` / `false`); errors are reserved for invalid input and store faults.
pub trait UserService: Interface + Send + Sync {
    /// Creates a new active user.
    fn create_user(&self, request: CreateUserRequest) -> CadastroResult<User>;

    /// Gets a user by ID.
    fn get_user_by_id(&self, id: UserId) -> CadastroResult<Option<User>>;

    /// Lists all users in creation order.
    fn get_all_users(&self) -> CadastroResult<Vec<User>>;

    /// Counts registered users.
    fn count_users(&self) -> CadastroResult<usize>;

    /// Deactivates a user.
    ///
    /// Returns `false` when the user does not exist or is an admin.
    fn deactivate_user(&self, id: UserId) -> CadastroResult<bool>;

    /// Builds the structured user report.
    fn build_user_report(&self) -> CadastroResult<UserReport>;

    /// Renders the user report as text.
    fn generate_user_report(&self) -> CadastroResult<String> {
        Ok(self.build_user_report()?.to_string())
    }
}

//! User service implementation.

use crate::dto::CreateUserRequest;
use crate::report::{ReportOptions, UserReport};
use crate::user_service::UserService;
use cadastro_core::{CadastroError, CadastroResult, User, UserId, ValidateExt};
use cadastro_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service backed by an injected [`UserRepository`].
///
/// Usable directly through [`UserServiceImpl::new`] or as a Shaku component.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    report_options: ReportOptions,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>, report_options: ReportOptions) -> Self {
        Self {
            user_repository,
            report_options,
        }
    }

    /// Returns the report options in effect.
    #[must_use]
    pub const fn report_options(&self) -> ReportOptions {
        self.report_options
    }
}

impl UserService for UserServiceImpl {
    fn create_user(&self, request: CreateUserRequest) -> CadastroResult<User> {
        debug!("Creating user: {}", request.nome);

        request.validate_request()?;

        let user = User::from(request);
        let saved_user = self.user_repository.save(&user)?;

        info!("User created: {} (admin: {})", saved_user.id, saved_user.is_admin);
        Ok(saved_user)
    }

    fn get_user_by_id(&self, id: UserId) -> CadastroResult<Option<User>> {
        debug!("Getting user: {}", id);
        self.user_repository.find_by_id(id)
    }

    fn get_all_users(&self) -> CadastroResult<Vec<User>> {
        debug!("Listing users");
        self.user_repository.find_all()
    }

    fn count_users(&self) -> CadastroResult<usize> {
        self.user_repository.count()
    }

    fn deactivate_user(&self, id: UserId) -> CadastroResult<bool> {
        debug!("Deactivating user: {}", id);

        match self.user_repository.update_with(id, &mut User::deactivate) {
            Ok(Some(_)) => {
                info!("User deactivated: {}", id);
                Ok(true)
            }
            Ok(None) => {
                debug!("User not found for deactivation: {}", id);
                Ok(false)
            }
            Err(CadastroError::BusinessRule(reason)) => {
                warn!("Deactivation refused: {}", reason);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn build_user_report(&self) -> CadastroResult<UserReport> {
        debug!("Generating user report");
        let users = self.user_repository.find_all()?;
        Ok(UserReport::new(&users, self.report_options))
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("report_options", &self.report_options)
            .finish_non_exhaustive()
    }
}

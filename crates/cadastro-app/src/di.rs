//! Dependency injection module using Shaku.

use cadastro_config::AppConfig;
use cadastro_core::{module, HasComponent};
use cadastro_repository::{InMemoryUserRepository, UserRepository};
use cadastro_service::{ReportOptions, UserService, UserServiceImpl, UserServiceImplParameters};
use std::sync::Arc;

// In-process module: in-memory store plus the user service on top of it.
module! {
    pub CadastroModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Maps the report section of the configuration onto service options.
#[must_use]
pub fn report_options(config: &AppConfig) -> ReportOptions {
    ReportOptions {
        include_summary: config.report.include_summary,
    }
}

/// Builds the application module from configuration.
///
/// Every call returns a module with its own empty store.
#[must_use]
pub fn build_module(config: &AppConfig) -> Arc<CadastroModule> {
    let module = CadastroModule::builder()
        .with_component_parameters::<UserServiceImpl>(UserServiceImplParameters {
            report_options: report_options(config),
        })
        .build();

    Arc::new(module)
}

/// Trait for resolving the services of a module.
pub trait ServiceResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the user repository from the module.
    fn user_repository(&self) -> Arc<dyn UserRepository>;
}

impl ServiceResolver for CadastroModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_service::CreateUserRequest;

    #[test]
    fn test_has_component_trait_bounds() {
        fn _assert_has_user_service<T: HasComponent<dyn UserService>>() {}
        fn _assert_has_user_repository<T: HasComponent<dyn UserRepository>>() {}

        _assert_has_user_service::<CadastroModule>();
        _assert_has_user_repository::<CadastroModule>();
    }

    #[test]
    fn test_service_and_repository_share_store() {
        let module = build_module(&AppConfig::default());
        let service = module.user_service();
        let user = service
            .create_user(CreateUserRequest::new("Alice", "alice@email.com", 28))
            .unwrap();

        let repository = module.user_repository();
        assert_eq!(repository.count().unwrap(), 1);
        assert!(repository.find_by_id(user.id).unwrap().is_some());
    }

    #[test]
    fn test_modules_are_isolated() {
        let config = AppConfig::default();
        let first = build_module(&config);
        let second = build_module(&config);
        first
            .user_service()
            .create_user(CreateUserRequest::new("Alice", "alice@email.com", 28))
            .unwrap();

        assert_eq!(second.user_service().count_users().unwrap(), 0);
    }

    #[test]
    fn test_report_options_from_config() {
        let mut config = AppConfig::default();
        config.report.include_summary = false;

        let module = build_module(&config);
        let report = module.user_service().generate_user_report().unwrap();
        assert!(!report.contains("Total:"));
        assert!(!report_options(&config).include_summary);
    }
}

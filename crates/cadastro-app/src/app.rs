//! Application runner.

use crate::di::{build_module, CadastroModule, ServiceResolver};
use cadastro_config::{AppConfig, SeedUser};
use cadastro_core::{CadastroError, CadastroResult, User};
use cadastro_service::{CreateUserRequest, UserService};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of seeding the store from configuration.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    /// Users that were created.
    pub created: Vec<User>,
    /// Seeds that were refused, with the reason.
    pub rejected: Vec<(SeedUser, CadastroError)>,
}

/// Configured application instance.
pub struct App {
    config: AppConfig,
    module: Arc<CadastroModule>,
}

impl App {
    /// Creates an application with a fresh, empty store.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let module = build_module(&config);
        Self { config, module }
    }

    /// The configuration the application was built with.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The user service.
    #[must_use]
    pub fn user_service(&self) -> Arc<dyn UserService> {
        self.module.user_service()
    }

    /// Creates the configured seed users.
    ///
    /// Refused seeds are logged and collected; they do not abort the run.
    pub fn seed(&self) -> CadastroResult<SeedOutcome> {
        let service = self.user_service();
        let mut outcome = SeedOutcome::default();

        for seed in &self.config.seed.users {
            let mut request = CreateUserRequest::new(seed.nome.clone(), seed.email.clone(), seed.idade);
            request.is_admin = seed.is_admin;

            match service.create_user(request) {
                Ok(mut user) => {
                    if seed.inativo {
                        if service.deactivate_user(user.id)? {
                            if let Some(updated) = service.get_user_by_id(user.id)? {
                                user = updated;
                            }
                        } else {
                            warn!("Seed user {} could not be deactivated", user.name);
                        }
                    }
                    outcome.created.push(user);
                }
                Err(e) if e.is_client_error() => {
                    warn!("Seed user {} rejected: {}", seed.nome, e);
                    outcome.rejected.push((seed.clone(), e));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Seeded {} user(s), {} rejected",
            outcome.created.len(),
            outcome.rejected.len()
        );
        Ok(outcome)
    }

    /// Seeds the store and returns the rendered report.
    pub fn run(&self) -> CadastroResult<String> {
        self.seed()?;
        self.user_service().generate_user_report()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

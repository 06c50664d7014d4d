//! Test-support helpers.
//!
//! Only compiled for tests or with the `test-support` feature.

use crate::r#impl::UserServiceImpl;
use crate::report::ReportOptions;
use cadastro_repository::InMemoryUserRepository;
use std::ops::Deref;
use std::sync::Arc;

/// A user service paired with the store it writes to.
#[derive(Debug)]
pub struct TestUserService {
    service: UserServiceImpl,
    repository: Arc<InMemoryUserRepository>,
}

impl TestUserService {
    /// Empties the store, returning the service to its initial state.
    pub fn reset(&self) {
        self.repository.clear();
    }

    /// The backing repository.
    #[must_use]
    pub fn repository(&self) -> &InMemoryUserRepository {
        &self.repository
    }
}

impl Deref for TestUserService {
    type Target = UserServiceImpl;

    fn deref(&self) -> &Self::Target {
        &self.service
    }
}

/// Returns a fresh service over an empty in-memory store.
#[must_use]
pub fn fresh_user_service() -> TestUserService {
    fresh_user_service_with(ReportOptions::default())
}

/// Returns a fresh service with custom report options.
#[must_use]
pub fn fresh_user_service_with(options: ReportOptions) -> TestUserService {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserServiceImpl::new(repository.clone(), options);
    TestUserService {
        service,
        repository,
    }
}

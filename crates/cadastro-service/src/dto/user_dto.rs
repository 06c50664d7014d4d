//! User-related DTOs.

use cadastro_core::rules::{adult_age, valid_name};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "valid_name"))]
    pub nome: String,

    pub email: String,

    #[validate(custom(function = "adult_age"))]
    pub idade: u32,

    #[serde(default, rename = "isAdmin", alias = "is_admin")]
    pub is_admin: bool,
}

impl CreateUserRequest {
    /// Creates a request for a regular (non-admin) user.
    #[must_use]
    pub fn new(nome: impl Into<String>, email: impl Into<String>, idade: u32) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            idade,
            is_admin: false,
        }
    }

    /// Marks the request as creating an administrator.
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

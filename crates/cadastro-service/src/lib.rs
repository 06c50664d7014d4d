//! # Cadastro Service
//!
//! Business logic service layer for Cadastro.
//! Contains the user service, its request DTOs, and report rendering.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod report;
pub mod user_service;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dto::*;
pub use r#impl::*;
pub use report::*;
pub use user_service::*;

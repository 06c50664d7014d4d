//! # Cadastro Core
//!
//! Core types, validation, and error definitions for Cadastro.
//! This crate provides the domain model and the foundational abstractions
//! used by the repository and service layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface};

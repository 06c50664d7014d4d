//! # Cadastro Domain
//!
//! Domain entities and value objects for Cadastro.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;

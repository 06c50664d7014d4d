//! # Cadastro Repository
//!
//! Data access layer for Cadastro.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (process-local store)
//! ```
//!
//! Records live only for the lifetime of the repository instance.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;

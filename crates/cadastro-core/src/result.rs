//! Result type aliases for Cadastro.

use crate::CadastroError;

/// A specialized `Result` type for Cadastro operations.
pub type CadastroResult<T> = Result<T, CadastroError>;

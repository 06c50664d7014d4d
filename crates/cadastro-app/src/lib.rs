//! # Cadastro Application Library
//!
//! Wires configuration, repository, and service together and exposes the
//! startup helpers used by the `cadastro` binary.

pub mod app;
pub mod di;
pub mod startup;

//! # Domain Layer
//!
//! Request/receipt types, the error taxonomy, and authorizer configuration.

pub mod config;
pub mod entities;
pub mod errors;

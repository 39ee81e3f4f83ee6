//! Infrastructure layer for cross-cutting concerns.
//!
//! Provides configuration file support and the error taxonomy shared by
//! every service.

pub mod config;
pub mod error;

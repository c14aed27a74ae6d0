//! # DevCal Core
//!
//! Core business logic and domain layer for the DevCal backend.
//! This crate contains domain entities, the token lifecycle and account
//! services, repository interfaces, and error types. Storage and mail
//! delivery are implemented in the infrastructure layer.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;

//! Type definitions shared by the API surface

pub mod response;

pub use response::{HealthResponse, StatusResponse};

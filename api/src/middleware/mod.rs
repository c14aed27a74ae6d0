pub mod auth;
pub mod cors;

pub use auth::{AccessGate, AuthContext, JwtAuth};
pub use cors::{create_cors, REFRESH_TOKEN_HEADER};

pub mod auth;
pub mod event;

pub use auth::*;
pub use event::*;

//! Repository interfaces for persistence, implemented in the infrastructure layer.

pub mod event;
pub mod token;
pub mod user;

pub use event::EventRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use event::MockEventRepository;
#[cfg(any(test, feature = "mocks"))]
pub use token::MockTokenRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user::MockUserRepository;

//! Business services containing domain logic and use cases.

pub mod auth;
pub mod event;
pub mod mail;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use event::EventService;
pub use mail::MailServiceTrait;
pub use token::{
    PurgeReport, TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};

#[cfg(any(test, feature = "mocks"))]
pub use mail::{RecordingMailService, SentMail};

//! Mail notification integration
//!
//! Delivery lives in the infrastructure layer; the domain only needs to ask
//! for a registration or login notice to be sent.

mod traits;

#[cfg(any(test, feature = "mocks"))]
mod mock;

pub use traits::MailServiceTrait;

#[cfg(any(test, feature = "mocks"))]
pub use mock::{RecordingMailService, SentMail};

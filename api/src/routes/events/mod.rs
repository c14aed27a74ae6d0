//! Calendar event handlers
//!
//! All of these run behind the access-token gate and act only on the
//! authenticated user's events.

pub mod create;
pub mod list;
pub mod remove;

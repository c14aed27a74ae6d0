//! Calendar event service

mod service;

#[cfg(test)]
mod tests;

pub use service::EventService;

//! # DevCal API
//!
//! actix-web application for the DevCal backend. The binary in `main.rs`
//! wires MySQL repositories into [`app::create_app`]; tests wire the
//! in-memory repositories from `dc_core`'s `mocks` feature instead.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};

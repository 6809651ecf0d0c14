//! HTTP API: server wiring, routing, and request/response mapping for the
//! recommendation and market engines.

pub mod app;
pub mod config;

pub use app::{build_app, state::AppState};
pub use config::ApiConfig;

//! # vidtube-api
//!
//! REST adapters over the service layer: routing, extractors, error to
//! status-code mapping, and server bootstrap.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;

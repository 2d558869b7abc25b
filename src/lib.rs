//! PFM Minimal: a small personal financial management advice API.
//!
//! Answers chat messages with canned advice chosen by keyword, behind an API
//! key bearer check, alongside unauthenticated health and status endpoints.

pub mod advice;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use advice::{get_advice, AdviceTopic};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;

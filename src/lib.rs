//! hello-api: a minimal HTTP service.
//!
//! Serves a liveness probe at `/health` and a greeting at `/`. The binary in
//! `main.rs` wires configuration and logging around [`routes::create_router`]
//! and [`http::start_server`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;

//! HTTP API layer for dormrate.
//!
//! This crate provides the REST surface:
//!
//! - **Endpoints**: users, follow graph, posts, comments, ratings
//! - **Middleware**: shared application state
//! - **Responses**: JSON views of the domain models
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;

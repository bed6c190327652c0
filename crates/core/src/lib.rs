//! Core business logic for dormrate.
//!
//! Services in this crate hold the consistency rules of the posting
//! service: existence checks before writes, the idempotent follow graph,
//! and the at-most-one-rating-per-user-per-post upsert.

pub mod services;

pub use services::*;

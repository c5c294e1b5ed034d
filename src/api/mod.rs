//! API layer
//!
//! Typed client for the CRM REST API and the error taxonomy its responses
//! are normalized into.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

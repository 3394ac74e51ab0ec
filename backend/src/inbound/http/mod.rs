//! Inbound HTTP adapter: handlers, DTOs, and request validation.
//!
//! Handlers depend only on domain ports via [`state::HttpState`] so the
//! persistence and storage adapters can be swapped or mocked wholesale.

pub mod error;
pub mod health;
pub mod items;
pub mod points;
pub mod state;
pub(crate) mod validation;

/// Handler result carrying the domain error, rendered by the
/// [`error`] module's `ResponseError` impl.
pub use crate::domain::ApiResult;

//! Custom extractors for Axum handlers.
//!
//! These standardize request parsing and keep rejection bodies in the
//! single-field [`crate::errors::ErrorResponse`] shape.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;

//! Gateway wire types

pub mod error;

pub use error::{upstream_diagnostic, ApiError, FailureKind};

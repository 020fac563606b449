//! Data Validation and Normalization
//!
//! Provides input validation, parameter range checking, and robust
//! percentile normalization for one-dimensional signals.

mod error;
mod normalizer;
mod validator;

pub use error::ValidationError;
pub use normalizer::{percentile, RobustNormalizer};
pub use validator::{ValidationConfig, Validator};

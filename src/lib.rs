//! FraudShield Library
//!
//! Shared plumbing for the credit-card fraud detection toolchain:
//! - Data store names, label column and artifact file names
//! - Immutable runtime configuration built from those constants
//! - YAML config reading and artifact save/load with uniform error wrapping

pub mod models;
pub mod utils;

pub use models::{AppConfig, AppError, AppResult, ErrorCode};
pub use utils::PersistenceUtils;

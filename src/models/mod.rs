//! Models Module - Configuration & Errors
//!
//! Single source of truth for runtime configuration and the error type.

pub mod config;
pub mod errors;

pub use config::*;
pub use errors::*;

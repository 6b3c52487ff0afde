//! Utils Module - Constants & File Helpers
//!
//! Shared helpers used across the fraud toolchain.

pub mod constants;
pub mod persistence;

pub use constants::*;
pub use persistence::*;

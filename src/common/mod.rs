//! Common utilities and shared functionality.
//!
//! Helpers used across the other modules: logging setup, base64url and
//! digest helpers, timestamp formatting and the boot-time `CustomError`.

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

//! Core module for the treeline plugin
//!
//! Contains the shared error types used across the dispatcher, platform
//! connection, and command implementations.

pub mod error;

pub use error::{TreelineError, TreelineResult};

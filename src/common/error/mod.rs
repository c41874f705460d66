//! Unified error types for Longan.
//!
//! Container, XML, and package-structure failures are all reported through
//! one closed enum so callers can pick a fallback per kind.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};

//! Structured logging facility for tencode
//!
//! Provides a single initialization point for the tracing subscriber.
//!
//! # Usage
//!
//! ```rust
//! use tencode_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};

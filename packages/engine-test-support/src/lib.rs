//! Engine test support utilities
//!
//! This crate provides utilities shared by the engine's test binaries,
//! currently unified logging initialization.

pub mod logging;

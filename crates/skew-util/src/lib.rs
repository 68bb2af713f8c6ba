//! Shared utilities for the skew auditor.
//!
//! This crate provides cross-cutting concerns used by the other skew crates:
//! the unified error type and terminal status output.

pub mod errors;
pub mod status;

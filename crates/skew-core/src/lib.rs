//! Core data model for the skew auditor: resolved module coordinates, the
//! resolution-report input format, the caller-chain index, and configuration.

pub mod config;
pub mod module;
pub mod resolution;

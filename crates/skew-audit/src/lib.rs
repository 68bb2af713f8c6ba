//! Version-alignment auditing: classify resolved modules into library
//! families, then verify that every module within a family resolved to the
//! same version, reporting which transitive caller introduced any deviation.

pub mod classify;
pub mod diagnostics;
pub mod family;
pub mod report;
pub mod verify;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all skew operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SkewError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed resolution report input.
    #[error("Input error: {message}")]
    #[diagnostic(help("Check that the resolution report is well-formed TOML"))]
    Input { message: String },

    /// Invalid or malformed skew.toml configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your skew.toml for syntax errors"))]
    Config { message: String },

    /// At least one module family resolved to more than one version and the
    /// fail-on-mismatch policy is active.
    #[error("Non-matching versions of suite modules detected")]
    #[diagnostic(help(
        "Align the versions of all modules in each family, or run without --fail-on-mismatch"
    ))]
    VersionMismatch,

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SkewResult<T> = miette::Result<T>;

//! Foundation error type.
//!
//! Sub-crates define their own error enums and convert them into `CoreError`
//! via `From` impls, or keep them separate and wrap `CoreError` as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `lane-core` and a common base for the other
/// `lane-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lane-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

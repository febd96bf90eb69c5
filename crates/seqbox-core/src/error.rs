//! Error types for SeqBox.
//!
//! The operator itself has no failure path: a cancelled drag is a normal
//! terminal state and mismatched input events pass through silently. The
//! only fallible surface is the host binding registry.

use thiserror::Error;

/// Main error type for SeqBox operations.
#[derive(Error, Debug)]
pub enum SeqBoxError {
    #[error("input binding not found: {0}")]
    BindingNotFound(uuid::Uuid),
}

/// Result type alias for SeqBox operations.
pub type Result<T> = std::result::Result<T, SeqBoxError>;

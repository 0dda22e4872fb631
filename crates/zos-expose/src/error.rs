//! Error types for expose operations
//!
//! Only argument and contract violations are errors. Vetoed or dropped
//! intents are reported as "not started" by the operation's return value.

use thiserror::Error;
use crate::registry::SurfaceId;

/// Errors surfaced to the host
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExposeError {
    /// Index does not address a registered surface
    #[error("index {index} out of range for {len} surfaces")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of registered surfaces
        len: usize,
    },

    /// Surface identity is already registered
    #[error("surface {0} is already registered")]
    DuplicateSurface(SurfaceId),

    /// Configuration failed to parse or validate
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ExposeError {
    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result alias for expose operations
pub type Result<T> = std::result::Result<T, ExposeError>;

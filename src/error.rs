//! Runtime error taxonomy
//!
//! Every error raised by this layer is a programming-contract violation by
//! the emitted code that called it, not a transient condition. Errors are
//! raised synchronously at the point of detection and are never retried,
//! swallowed, or logged internally; callers propagate them as fatal.

use thiserror::Error;

/// Errors raised by the runtime support layer
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Module name is empty or contains an empty path segment
    #[error("invalid module name: \"{0}\"")]
    InvalidName(String),

    /// A module with this dotted name was already registered with members
    #[error("duplicate module definition: {0}")]
    DuplicateDefinition(String),

    /// The foreach construct bound more loop variables than the iterable
    /// shape supports
    #[error("foreach supports only one loop variable when iterating over {shape}")]
    ArityMismatch {
        /// Human-readable shape name (e.g. "a sequence")
        shape: &'static str,
    },

    /// The value passed to foreach has no iterable shape
    #[error("foreach: unsupported iterable: {0}")]
    UnsupportedIterable(String),

    /// The value passed to a scoped-resource block does not expose the
    /// enter/exit protocol
    #[error("scoped resources must have \"enter\" and \"exit\" methods, got {0}")]
    InvalidResourceProtocol(String),

    /// A host capability (print sink, class system) is not available
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

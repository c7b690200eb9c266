//! # Bootorder Kernel Errors
//!
//! Defines the crate-wide [`Error`] wrapping the subsystem errors, plus the
//! lifecycle failures of the bootstrap sequence itself.
use std::error::Error as StdError;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::graph::error::OrderingError;
use crate::manifest::error::ManifestError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// No valid startup order exists
    #[error("Startup ordering failed: {0}")]
    Ordering(#[from] OrderingError),

    /// Manifest could not be read or is malformed
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// An activator failed. The source is the activator's own error.
    #[error("Activation failed: {0}")]
    Activation(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// The bootstrap was driven out of sequence.
    #[error("Kernel lifecycle error during {phase:?}: {message}")]
    KernelLifecycleError {
        phase: KernelLifecyclePhase,
        message: String,
    },
}

/// Represents a specific phase of the bootstrap sequence.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Discover")]
    Discover,
    #[error("Activate")]
    Activate,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

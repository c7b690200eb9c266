//! # Bootorder Kernel
//!
//! The `kernel` module wires the registry, graph and activation subsystems
//! into a single bootstrap sequence.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Bootstrapping**: [`Bootstrap`](bootstrap::Bootstrap) owns the shared
//!   component registry, resolves the startup order and drives activation.
//!   It is an explicit object passed through the host's bootstrap code, not
//!   a process-wide singleton.
//! - **Core Constants**: application identity and defaults in `constants`.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) and `Result`
//!   alias in `error`.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Bootstrap;
pub use error::{Error, KernelLifecyclePhase, Result};

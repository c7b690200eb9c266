//! # Bootorder Activation
//!
//! Walks a resolved [`StartupOrder`](crate::graph::StartupOrder) and hands each
//! startup component to an [`Activator`], one at a time. Placeholder
//! predecessors are skipped. The first failing activation stops the walk and
//! its error is returned unchanged.
pub mod driver;

pub use driver::{ActivationDriver, ActivationReport, Activator, FnActivator};

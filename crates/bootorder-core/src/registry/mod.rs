//! # Bootorder Component Registry
//!
//! Accumulates the component descriptors reported by a discovery
//! collaborator and hands out the startup-eligible subset.
//!
//! - [`ComponentDescriptor`] / [`ComponentId`]: the immutable description of
//!   one discovered component, keyed by a stable identity.
//! - [`ComponentRegistry`]: the accumulated set. Recording an identity twice
//!   is idempotent; the first registration wins.
//! - [`SharedComponentRegistry`]: an `Arc<Mutex<_>>` handle for hosts that
//!   discover components from several tasks at once.
pub mod component_registry;
pub mod descriptor;

pub use component_registry::{ComponentRegistry, SharedComponentRegistry};
pub use descriptor::{ComponentDescriptor, ComponentId};

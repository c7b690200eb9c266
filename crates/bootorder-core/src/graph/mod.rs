//! # Bootorder Dependency Graph
//!
//! Turns the startup-eligible components into a dependency graph and drains
//! it into an activation order.
//!
//! ## Key Components:
//!
//! - **[`Graph`]**: an arena of [`Node`]s keyed by [`ComponentId`](crate::registry::ComponentId).
//!   An edge from X to Y means "X depends on Y", so Y must be initialized first.
//! - **[`GraphBuilder`]**: builds the graph from the eligible subset, resolving
//!   `after` references against the full registry. Components that are known
//!   but not eligible become placeholder nodes.
//! - **[`Sequencer`]**: Kahn's algorithm over the dependency relation. The
//!   frontier starts at components nothing depends on; the emitted sequence is
//!   reversed into a [`StartupOrder`] so dependencies come first.
//! - **[`OrderingError`]**: unresolved (unknown) dependencies and cycles.
pub mod builder;
pub mod error;
pub mod model;
pub mod sequencer;

pub use builder::GraphBuilder;
pub use error::OrderingError;
pub use model::{Graph, Node, NodeIndex};
pub use sequencer::{OrderedComponent, Sequencer, StartupOrder};

#[cfg(test)]
mod tests;

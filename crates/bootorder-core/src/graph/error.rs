//! # Bootorder Ordering Errors
//!
//! Failures that make a startup order impossible. Both are configuration
//! errors and abort the bootstrap.
use thiserror::Error;

use crate::registry::ComponentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// An `after` reference names a component nobody registered.
    #[error("Unsatisfied dependency: component '{component}' must start after '{dependency}', which is not a known component")]
    UnresolvedDependency {
        component: ComponentId,
        dependency: ComponentId,
    },

    /// The sequencer ran out of ready components while edges remained.
    #[error("Circular dependency detected between '{component}' and {}; cycle: {}", format_ids(.unresolved), format_cycle(.cycle))]
    CircularDependency {
        /// One component that could not be placed
        component: ComponentId,
        /// Its dependencies that were never resolved
        unresolved: Vec<ComponentId>,
        /// One full cycle through `component`, without repeating the first element
        cycle: Vec<ComponentId>,
    },
}

fn format_ids(ids: &[ComponentId]) -> String {
    let names: Vec<&str> = ids.iter().map(ComponentId::as_str).collect();
    format!("[{}]", names.join(", "))
}

fn format_cycle(cycle: &[ComponentId]) -> String {
    let mut names: Vec<&str> = cycle.iter().map(ComponentId::as_str).collect();
    if let Some(first) = names.first().copied() {
        names.push(first);
    }
    names.join(" -> ")
}

pub mod activation;
pub mod graph;
pub mod kernel;
pub mod manifest;
pub mod registry;

// Re-export key public types for the binary and embedding hosts
pub use activation::{ActivationDriver, ActivationReport, Activator, FnActivator};
pub use graph::{GraphBuilder, OrderingError, Sequencer, StartupOrder};
pub use kernel::Bootstrap;
pub use kernel::error::{Error, Result};
pub use manifest::{ManifestError, ManifestFormat, StartupManifest};
pub use registry::{ComponentDescriptor, ComponentId, ComponentRegistry, SharedComponentRegistry};

#[cfg(test)]
mod tests;

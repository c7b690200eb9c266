use crate::activation::{ActivationDriver, ActivationReport, Activator};
use crate::graph::{GraphBuilder, Sequencer, StartupOrder};
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::manifest::StartupManifest;
use crate::registry::{ComponentDescriptor, SharedComponentRegistry};

/// Coordinates one bootstrap: discovery, ordering, then activation.
///
/// Discovery may happen from several tasks through [`Bootstrap::discover`]
/// or a cloned [`SharedComponentRegistry`]. Once the order is resolved the
/// component set is frozen: components recorded later, even through a
/// registry handle, make the next `resolve` or `run` fail. [`Bootstrap::run`]
/// may only be attempted once.
#[derive(Debug)]
pub struct Bootstrap {
    registry: SharedComponentRegistry,
    // Resolved once, then reused
    order: Option<StartupOrder>,
    // Registry size when the order was resolved
    resolved_len: usize,
    activated: bool,
}

impl Bootstrap {
    /// Creates a bootstrap with an empty registry.
    pub fn new() -> Self {
        Self::with_registry(SharedComponentRegistry::new())
    }

    /// Creates a bootstrap over a registry the host already feeds.
    pub fn with_registry(registry: SharedComponentRegistry) -> Self {
        log::info!("Initializing {} v{}", constants::APP_NAME, constants::APP_VERSION);
        Self {
            registry,
            order: None,
            resolved_len: 0,
            activated: false,
        }
    }

    /// The shared registry. Components recorded through it after the order
    /// is resolved are rejected by the next [`Bootstrap::resolve`].
    pub fn registry(&self) -> &SharedComponentRegistry {
        &self.registry
    }

    /// Record a discovered component. Returns whether its identity was new.
    pub async fn discover(&self, descriptor: ComponentDescriptor) -> Result<bool> {
        if self.order.is_some() {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Discover,
                message: format!(
                    "Component '{}' discovered after the startup order was resolved",
                    descriptor.id
                ),
            });
        }
        Ok(self.registry.record(descriptor).await)
    }

    /// Record every component of a manifest. Returns how many identities were new.
    pub async fn discover_manifest(&self, manifest: &StartupManifest) -> Result<usize> {
        let mut recorded = 0;
        for descriptor in &manifest.components {
            if self.discover(descriptor.clone()).await? {
                recorded += 1;
            }
        }
        log::debug!(
            "Discovered {} new components from a manifest of {}",
            recorded,
            manifest.len()
        );
        Ok(recorded)
    }

    /// Resolve the startup order from everything discovered so far.
    ///
    /// The first successful call freezes the component set; later calls
    /// return the same order, or fail if the registry grew in the meantime.
    pub async fn resolve(&mut self) -> Result<&StartupOrder> {
        if self.order.is_some() {
            let discovered = self.registry.len().await;
            if discovered != self.resolved_len {
                return Err(Error::KernelLifecycleError {
                    phase: KernelLifecyclePhase::Discover,
                    message: format!(
                        "{} components recorded after the startup order was resolved",
                        discovered.saturating_sub(self.resolved_len)
                    ),
                });
            }
        }

        let order = match self.order.take() {
            Some(order) => order,
            None => {
                let registry = self.registry.snapshot().await;
                self.resolved_len = registry.len();
                log::info!(
                    "Resolving startup order for {} of {} discovered components",
                    registry.eligible_components().len(),
                    registry.len()
                );
                let graph = GraphBuilder::new(&registry).build_eligible()?;
                Sequencer::sort(graph)?
            }
        };
        Ok(self.order.insert(order))
    }

    /// Resolve the order and activate every startup component in it.
    ///
    /// One-shot: a second call fails without touching the activator, even if
    /// the first one failed while ordering or part way through activation.
    pub async fn run<A>(&mut self, activator: &mut A) -> Result<ActivationReport>
    where
        A: Activator + ?Sized,
    {
        if self.activated {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Activate,
                message: "Startup components already activated".to_string(),
            });
        }

        self.activated = true;
        let order = self.resolve().await?.clone();

        let report = ActivationDriver::activate(&order, activator)
            .await
            .map_err(|e| Error::Activation(Box::new(e)))?;
        log::info!("Bootstrap complete: {} components activated.", report.activated.len());
        Ok(report)
    }

    /// The resolved order, if [`Bootstrap::resolve`] has succeeded.
    pub fn order(&self) -> Option<&StartupOrder> {
        self.order.as_ref()
    }

    /// Returns whether activation has been attempted.
    pub fn is_activated(&self) -> bool {
        self.activated
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

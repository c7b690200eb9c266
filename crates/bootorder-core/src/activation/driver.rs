use std::error::Error as StdError;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::graph::StartupOrder;
use crate::registry::{ComponentDescriptor, ComponentId};

/// Materializes a component once its turn in the startup order arrives.
#[async_trait]
pub trait Activator: Send {
    type Error: StdError + Send + Sync + 'static;

    async fn activate(&mut self, component: &ComponentDescriptor) -> Result<(), Self::Error>;
}

/// Adapts a synchronous closure into an [`Activator`].
pub struct FnActivator<F, E> {
    activate: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> FnActivator<F, E>
where
    F: FnMut(&ComponentDescriptor) -> Result<(), E> + Send,
    E: StdError + Send + Sync + 'static,
{
    pub fn new(activate: F) -> Self {
        Self {
            activate,
            _error: PhantomData,
        }
    }
}

#[async_trait]
impl<F, E> Activator for FnActivator<F, E>
where
    F: FnMut(&ComponentDescriptor) -> Result<(), E> + Send,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    async fn activate(&mut self, component: &ComponentDescriptor) -> Result<(), E> {
        (self.activate)(component)
    }
}

/// Outcome of a completed activation walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationReport {
    /// Components activated, in order
    pub activated: Vec<ComponentId>,
    /// Placeholder predecessors passed over
    pub skipped: Vec<ComponentId>,
}

/// Drives activation strictly in startup order.
pub struct ActivationDriver;

impl ActivationDriver {
    /// Activate every non-placeholder component of `order`, sequentially.
    ///
    /// Activation of the next component starts only after the previous one
    /// returned. The first error stops the walk and is returned as is.
    pub async fn activate<A>(order: &StartupOrder, activator: &mut A) -> Result<ActivationReport, A::Error>
    where
        A: Activator + ?Sized,
    {
        let mut report = ActivationReport::default();

        for entry in order {
            if entry.is_placeholder() {
                log::debug!("Skipping placeholder predecessor '{}'", entry.id());
                report.skipped.push(entry.id().clone());
                continue;
            }

            log::info!("Activating component: {}", entry.id());
            if let Err(e) = activator.activate(entry.descriptor()).await {
                log::error!("Activation of component '{}' failed: {}", entry.id(), e);
                return Err(e);
            }
            report.activated.push(entry.id().clone());
        }

        log::info!("Activated {} startup components", report.activated.len());
        Ok(report)
    }
}

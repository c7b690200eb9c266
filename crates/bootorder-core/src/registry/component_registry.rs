use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::registry::descriptor::{ComponentDescriptor, ComponentId};

/// Registry of every discovered component, eligible for startup or not.
#[derive(Default, Clone)]
pub struct ComponentRegistry {
    /// Descriptors in discovery order
    entries: Vec<Arc<ComponentDescriptor>>,
    /// Position of each identity in `entries`
    index: HashMap<ComponentId, usize>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.entries.iter().map(|d| d.id.as_str()).collect();
        f.debug_struct("ComponentRegistry")
            .field("components", &ids)
            .finish()
    }
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered component.
    ///
    /// Returns `false` when the identity was already known; the earlier
    /// descriptor is kept and the new one is ignored.
    pub fn record(&mut self, descriptor: ComponentDescriptor) -> bool {
        if self.index.contains_key(&descriptor.id) {
            log::debug!("Ignoring duplicate registration of component '{}'", descriptor.id);
            return false;
        }
        log::debug!("Recorded component: {}", descriptor);
        self.index.insert(descriptor.id.clone(), self.entries.len());
        self.entries.push(Arc::new(descriptor));
        true
    }

    /// Look up any known component by identity.
    pub fn get(&self, id: &str) -> Option<Arc<ComponentDescriptor>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.entries[pos]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The subset of components marked for startup ordering.
    ///
    /// Callers must treat the result as an unordered set.
    pub fn eligible_components(&self) -> Vec<Arc<ComponentDescriptor>> {
        self.entries
            .iter()
            .filter(|descriptor| descriptor.eligible)
            .cloned()
            .collect()
    }

    /// Iterate over every recorded component.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentDescriptor>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded component.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

/// Thread-safe handle to a [`ComponentRegistry`], cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SharedComponentRegistry {
    registry: Arc<Mutex<ComponentRegistry>>,
}

impl SharedComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the underlying `Arc<Mutex<ComponentRegistry>>`.
    pub fn registry(&self) -> Arc<Mutex<ComponentRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Record a component; safe to call from concurrent tasks.
    pub async fn record(&self, descriptor: ComponentDescriptor) -> bool {
        self.registry.lock().await.record(descriptor)
    }

    /// Copy of the registry as it stands now. Descriptors are shared, not cloned.
    pub async fn snapshot(&self) -> ComponentRegistry {
        self.registry.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.registry.lock().await.len()
    }
}

impl From<ComponentRegistry> for SharedComponentRegistry {
    fn from(registry: ComponentRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}

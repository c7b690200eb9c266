use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::registry::{ComponentDescriptor, ComponentId};

/// Position of a node in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph vertex wrapping one component.
#[derive(Debug, Clone)]
pub struct Node {
    descriptor: Arc<ComponentDescriptor>,
    /// Nodes this one still waits for. Drained by the sequencer.
    pub(crate) depends_on: HashSet<NodeIndex>,
    /// Set once the node is reached as a member of the eligible input
    pub(crate) activate: bool,
}

impl Node {
    fn new(descriptor: Arc<ComponentDescriptor>) -> Self {
        Self {
            descriptor,
            depends_on: HashSet::new(),
            activate: false,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.descriptor.id
    }

    pub fn descriptor(&self) -> &Arc<ComponentDescriptor> {
        &self.descriptor
    }

    /// Whether the node only exists to order its dependants.
    pub fn is_placeholder(&self) -> bool {
        !self.activate
    }

    pub fn dependencies(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.depends_on.iter().copied()
    }
}

// Nodes are equal iff their identities are equal
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Dependency graph for one sequencing run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    index: HashMap<ComponentId, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `descriptor`'s identity, creating it if needed.
    pub(crate) fn ensure_node(&mut self, descriptor: &Arc<ComponentDescriptor>) -> NodeIndex {
        if let Some(&idx) = self.index.get(&descriptor.id) {
            return idx;
        }
        let idx = NodeIndex(self.nodes.len());
        self.nodes.push(Node::new(Arc::clone(descriptor)));
        self.index.insert(descriptor.id.clone(), idx);
        idx
    }

    /// Add an edge: `dependant` depends on `dependency`.
    pub(crate) fn add_edge(&mut self, dependant: NodeIndex, dependency: NodeIndex) {
        self.nodes[dependant.0].depends_on.insert(dependency);
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.0]
    }

    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeIndex(i), node))
    }

    /// Identities `id` depends on, sorted.
    pub fn dependencies_of(&self, id: &str) -> Vec<ComponentId> {
        let Some(idx) = self.find(id) else {
            return Vec::new();
        };
        let mut ids: Vec<ComponentId> = self
            .node(idx)
            .dependencies()
            .map(|dep| self.node(dep).id().clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.depends_on.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::graph::error::OrderingError;
use crate::graph::model::{Graph, NodeIndex};
use crate::registry::{ComponentDescriptor, ComponentId};

/// One position in a [`StartupOrder`].
#[derive(Debug, Clone)]
pub struct OrderedComponent {
    descriptor: Arc<ComponentDescriptor>,
    placeholder: bool,
}

impl OrderedComponent {
    pub fn id(&self) -> &ComponentId {
        &self.descriptor.id
    }

    pub fn descriptor(&self) -> &Arc<ComponentDescriptor> {
        &self.descriptor
    }

    /// Placeholders hold a position for ordering only and are never activated.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Components in activation order: every dependency precedes its dependants.
#[derive(Debug, Clone, Default)]
pub struct StartupOrder {
    entries: Vec<OrderedComponent>,
}

impl StartupOrder {
    pub fn iter(&self) -> std::slice::Iter<'_, OrderedComponent> {
        self.entries.iter()
    }

    /// Identities in order, placeholders included.
    pub fn identities(&self) -> impl Iterator<Item = &ComponentId> {
        self.entries.iter().map(OrderedComponent::id)
    }

    /// Components to activate, in order, placeholders skipped.
    pub fn activation_targets(&self) -> impl Iterator<Item = &Arc<ComponentDescriptor>> {
        self.entries
            .iter()
            .filter(|entry| !entry.placeholder)
            .map(OrderedComponent::descriptor)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &ComponentId> {
        self.entries
            .iter()
            .filter(|entry| entry.placeholder)
            .map(OrderedComponent::id)
    }

    /// Position of `id` in the order, placeholders included.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id().as_str() == id)
    }

    pub fn activation_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.placeholder).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a StartupOrder {
    type Item = &'a OrderedComponent;
    type IntoIter = std::slice::Iter<'a, OrderedComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Kahn's topological sort over the dependency relation.
pub struct Sequencer;

impl Sequencer {
    /// Drain `graph` into a [`StartupOrder`].
    ///
    /// The frontier starts with nodes no other node depends on. Each emitted
    /// node releases its dependencies; a dependency joins the frontier once
    /// nothing unprocessed depends on it any more. The emitted sequence lists
    /// dependants first and is reversed before returning. Order among
    /// unrelated components is unspecified.
    pub fn sort(mut graph: Graph) -> Result<StartupOrder, OrderingError> {
        let node_count = graph.len();

        // Number of unprocessed nodes depending on each node
        let mut dependants = vec![0usize; node_count];
        for node in &graph.nodes {
            for dep in &node.depends_on {
                dependants[dep.0] += 1;
            }
        }

        let mut frontier: VecDeque<NodeIndex> = (0..node_count)
            .filter(|&i| dependants[i] == 0)
            .map(NodeIndex)
            .collect();
        let mut emitted = Vec::with_capacity(node_count);
        let mut is_emitted = vec![false; node_count];

        while let Some(current) = frontier.pop_front() {
            emitted.push(current);
            is_emitted[current.0] = true;

            let mut released: Vec<NodeIndex> = graph.nodes[current.0].depends_on.drain().collect();
            released.sort();
            for dep in released {
                dependants[dep.0] -= 1;
                if dependants[dep.0] == 0 {
                    frontier.push_back(dep);
                }
            }
        }

        if graph.nodes.iter().any(|node| !node.depends_on.is_empty()) {
            let err = Self::circular_dependency(&graph, &is_emitted);
            log::error!("{}", err);
            return Err(err);
        }

        emitted.reverse();
        let entries: Vec<OrderedComponent> = emitted
            .into_iter()
            .map(|idx| {
                let node = graph.node(idx);
                OrderedComponent {
                    descriptor: Arc::clone(node.descriptor()),
                    placeholder: node.is_placeholder(),
                }
            })
            .collect();

        let order = StartupOrder { entries };
        log::info!(
            "Resolved startup order: [{}]",
            order.identities().map(ComponentId::as_str).collect::<Vec<_>>().join(", ")
        );
        Ok(order)
    }

    fn circular_dependency(graph: &Graph, is_emitted: &[bool]) -> OrderingError {
        let cycle = Self::find_cycle(graph, is_emitted);
        let culprit = cycle.first().copied().or_else(|| {
            graph
                .nodes()
                .find(|(_, node)| !node.depends_on.is_empty())
                .map(|(idx, _)| idx)
        });

        let (component, unresolved) = match culprit {
            Some(idx) => {
                let node = graph.node(idx);
                let mut unresolved: Vec<ComponentId> = node
                    .dependencies()
                    .map(|dep| graph.node(dep).id().clone())
                    .collect();
                unresolved.sort();
                (node.id().clone(), unresolved)
            }
            // Only reachable if called on a fully drained graph
            None => (ComponentId::new("<unknown>"), Vec::new()),
        };

        OrderingError::CircularDependency {
            component,
            unresolved,
            cycle: cycle.into_iter().map(|idx| graph.node(idx).id().clone()).collect(),
        }
    }

    /// Find one cycle among the nodes the sort could not emit.
    fn find_cycle(graph: &Graph, is_emitted: &[bool]) -> Vec<NodeIndex> {
        let mut remaining: Vec<bool> = is_emitted.iter().map(|emitted| !emitted).collect();

        // Leftovers with no edge into other leftovers are not on a cycle
        loop {
            let prunable: Vec<usize> = (0..graph.len())
                .filter(|&i| remaining[i] && graph.nodes[i].depends_on.iter().all(|d| !remaining[d.0]))
                .collect();
            if prunable.is_empty() {
                break;
            }
            for i in prunable {
                remaining[i] = false;
            }
        }

        let by_id = |a: &NodeIndex, b: &NodeIndex| graph.node(*a).id().cmp(graph.node(*b).id());
        let Some(mut current) = (0..graph.len())
            .filter(|&i| remaining[i])
            .map(NodeIndex)
            .min_by(by_id)
        else {
            return Vec::new();
        };

        let mut path: Vec<NodeIndex> = Vec::new();
        let mut seen: HashMap<NodeIndex, usize> = HashMap::new();
        loop {
            if let Some(&start) = seen.get(&current) {
                return path.split_off(start);
            }
            seen.insert(current, path.len());
            path.push(current);

            match graph
                .node(current)
                .dependencies()
                .filter(|d| remaining[d.0])
                .min_by(by_id)
            {
                Some(next) => current = next,
                None => return path,
            }
        }
    }
}

use std::sync::Arc;

use crate::graph::error::OrderingError;
use crate::graph::model::Graph;
use crate::registry::{ComponentDescriptor, ComponentRegistry};

/// Builds a [`Graph`] from startup-eligible components.
///
/// `after` references are resolved against the full registry, so a
/// dependency on a known component that is not itself eligible still
/// orders its dependants. Such nodes are placeholders and are never
/// activated.
pub struct GraphBuilder<'a> {
    registry: &'a ComponentRegistry,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder resolving references against `registry`
    pub fn new(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Build the graph for the registry's own eligible subset.
    pub fn build_eligible(&self) -> Result<Graph, OrderingError> {
        self.build(&self.registry.eligible_components())
    }

    /// Build the graph for `eligible`.
    ///
    /// Fails on the first `after` reference that names no known component.
    /// Self-references are kept as edges and rejected by the sequencer.
    pub fn build(&self, eligible: &[Arc<ComponentDescriptor>]) -> Result<Graph, OrderingError> {
        let mut graph = Graph::new();

        for descriptor in eligible {
            let node = graph.ensure_node(descriptor);
            graph.nodes[node.0].activate = true;

            for dependency_id in &descriptor.depends_on {
                let dependency = match graph.find(dependency_id.as_str()) {
                    Some(existing) => existing,
                    None => {
                        let found = self.registry.get(dependency_id.as_str()).ok_or_else(|| {
                            OrderingError::UnresolvedDependency {
                                component: descriptor.id.clone(),
                                dependency: dependency_id.clone(),
                            }
                        })?;
                        graph.ensure_node(&found)
                    }
                };
                log::debug!("Edge: '{}' starts after '{}'", descriptor.id, dependency_id);
                graph.add_edge(node, dependency);
            }
        }

        log::debug!(
            "Built startup graph with {} nodes and {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

//! Inheritance graph over registered classes.
//!
//! Uses `petgraph::DiGraph` with classes as nodes and a `base -> derived`
//! edge per declared base, so a topological sort yields bases before derived
//! classes - the dependency order the projection pass requires.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use clrbridge_core::{ProjectionError, TypeHash};

use crate::registry::ClassRegistry;

/// The class inheritance graph.
#[derive(Debug)]
pub struct InheritanceGraph {
    graph: DiGraph<TypeHash, ()>,
    nodes: FxHashMap<TypeHash, NodeIndex>,
}

impl InheritanceGraph {
    /// Build the graph for every class in the registry.
    ///
    /// Fails with [`ProjectionError::UnknownBase`] when a class names a base
    /// that was never registered.
    pub fn build(registry: &ClassRegistry) -> Result<Self, ProjectionError> {
        let mut graph = DiGraph::new();
        let mut nodes = FxHashMap::default();

        // Nodes in registration order keeps the sort deterministic.
        for class in registry.classes() {
            let idx = graph.add_node(class.type_hash);
            nodes.insert(class.type_hash, idx);
        }

        for class in registry.classes() {
            for base_name in &class.bases {
                let base = registry.get_class(base_name).ok_or_else(|| {
                    ProjectionError::UnknownBase {
                        class: class.name.clone(),
                        base: base_name.clone(),
                    }
                })?;
                graph.add_edge(nodes[&base.type_hash], nodes[&class.type_hash], ());
            }
        }

        Ok(Self { graph, nodes })
    }

    /// Topological order: every base precedes every class derived from it.
    ///
    /// Fails with [`ProjectionError::CircularInheritance`] when the graph
    /// contains a cycle.
    pub fn topo_order(&self, registry: &ClassRegistry) -> Result<Vec<TypeHash>, ProjectionError> {
        match toposort(&self.graph, None) {
            Ok(order) => Ok(order.into_iter().map(|idx| self.graph[idx]).collect()),
            Err(cycle) => {
                let hash = self.graph[cycle.node_id()];
                let class = registry
                    .class_by_hash(hash)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| hash.to_string());
                Err(ProjectionError::CircularInheritance { class })
            }
        }
    }

    /// Number of classes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

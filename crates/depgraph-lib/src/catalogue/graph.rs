//! Directed project graph produced by the bounded traversal
//!
//! Nodes are keyed by project id and carry the display label; edges point in
//! the "depends on" direction. Both collections behave as sets: adding an
//! existing node or edge is a no-op.

use super::records::ProjectView;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A project in the traversal output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphNode {
    /// Registry project id
    pub id: u64,
    /// Display label, `"{permalink} [{owner}]"`
    pub label: String,
}

impl GraphNode {
    pub fn new(id: u64, label: String) -> Self {
        Self { id, label }
    }
}

impl From<&ProjectView> for GraphNode {
    fn from(view: &ProjectView) -> Self {
        Self::new(view.id, view.label())
    }
}

/// Deduplicated directed graph of projects
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    /// Directed graph: nodes = projects, edges = "depends on"
    graph: DiGraph<GraphNode, ()>,
    /// Map from project id to node index for fast lookup
    node_map: HashMap<u64, NodeIndex>,
    /// Ordered (dependent, dependency) id pairs already drawn
    edge_set: HashSet<(u64, u64)>,
}

impl ProjectGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Add a node (idempotent - won't duplicate if already exists)
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node.id) {
            return idx;
        }

        let id = node.id;
        let idx = self.graph.add_node(node);
        self.node_map.insert(id, idx);
        idx
    }

    /// Add an edge `from -> to` between two existing nodes
    ///
    /// Returns `false` when the edge was already present or either endpoint
    /// is unknown.
    pub fn add_edge(&mut self, from_id: u64, to_id: u64) -> bool {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_map.get(&from_id), self.node_map.get(&to_id))
        else {
            trace!(from = from_id, to = to_id, "Edge endpoint not in graph");
            return false;
        };

        if !self.edge_set.insert((from_id, to_id)) {
            return false;
        }

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    /// Set union with another graph
    ///
    /// Lets independent traversals, each with its own accumulators, be
    /// combined afterwards.
    pub fn merge(&mut self, other: &ProjectGraph) {
        for node in other.nodes() {
            self.add_node(node.clone());
        }
        for (from, to) in other.edge_ids() {
            self.add_edge(from, to);
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Check if a project exists in the graph
    pub fn contains(&self, id: u64) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Check for the directed edge `from -> to`
    pub fn has_edge(&self, from_id: u64, to_id: u64) -> bool {
        self.edge_set.contains(&(from_id, to_id))
    }

    /// Get a node by project id
    pub fn get_node(&self, id: u64) -> Option<&GraphNode> {
        let idx = self.node_map.get(&id)?;
        Some(&self.graph[*idx])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Edges as `(from_id, to_id)` in insertion order
    pub fn edge_ids(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()].id, self.graph[edge.target()].id))
    }

    /// Edges as ordered label pairs, the form renderers draw
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].label.as_str(),
                self.graph[edge.target()].label.as_str(),
            )
        })
    }

    /// Sorted node ids, handy for comparing graphs regardless of build order
    pub fn sorted_node_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.node_map.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Sorted edge id pairs
    pub fn sorted_edge_ids(&self) -> Vec<(u64, u64)> {
        let mut edges: Vec<(u64, u64)> = self.edge_set.iter().copied().collect();
        edges.sort_unstable();
        edges
    }
}

impl Default for ProjectGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}

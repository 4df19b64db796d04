//! Depth-bounded traversal over the joined catalogue
//!
//! Starting from a seed frontier, each step records the frontier's nodes,
//! follows `uses` or `used_by` to the next frontier and recurses one level
//! deeper. Only depth bounds the walk; there is no cycle detection. Node and
//! edge accumulators live in a [`TraversalContext`] owned by the top-level
//! call and shared by every level, which is what keeps the output a set
//! instead of a tree with repeated subtrees.
//!
//! Depth counts hops from the seeds: with `max_depth = k` a project is drawn
//! only if it is at most `k` hops away from some seed.

use super::graph::{GraphNode, ProjectGraph};
use super::records::{ProjectSummary, ProjectView};
use crate::primitives::GraphMode;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Default traversal depth when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Accumulators and lookups for one traversal
pub struct TraversalContext<'a> {
    catalogue: HashMap<u64, &'a ProjectView>,
    mode: GraphMode,
    max_depth: usize,
    graph: ProjectGraph,
    /// Shallowest depth each project has been expanded at
    expanded: HashMap<u64, usize>,
}

impl<'a> TraversalContext<'a> {
    pub fn new(catalogue: &'a [ProjectView], mode: GraphMode, max_depth: usize) -> Self {
        let mut index = HashMap::with_capacity(catalogue.len());
        for view in catalogue {
            index.entry(view.id).or_insert(view);
        }

        Self {
            catalogue: index,
            mode,
            max_depth,
            graph: ProjectGraph::new(),
            expanded: HashMap::new(),
        }
    }

    /// Expand `seeds` into the accumulated graph
    ///
    /// Can be called more than once; later calls only add what is missing.
    pub fn run<I>(&mut self, seeds: I)
    where
        I: IntoIterator<Item = &'a ProjectView>,
    {
        if self.catalogue.is_empty() {
            debug!("Empty catalogue, nothing to traverse");
            return;
        }

        let frontier: Vec<&'a ProjectView> = seeds.into_iter().collect();
        debug!(
            seeds = frontier.len(),
            mode = %self.mode,
            max_depth = self.max_depth,
            "Starting traversal"
        );
        self.expand(frontier, 0);
    }

    /// Consume the context, returning the accumulated graph
    pub fn into_graph(self) -> ProjectGraph {
        self.graph
    }

    fn relation(&self, view: &'a ProjectView) -> &'a [ProjectSummary] {
        match self.mode {
            GraphMode::Uses => &view.uses,
            GraphMode::UsedBy => &view.used_by,
        }
    }

    /// True if `id` was already expanded at `depth` or shallower
    fn already_expanded(&self, id: u64, depth: usize) -> bool {
        self.expanded
            .get(&id)
            .is_some_and(|&expanded_at| expanded_at <= depth)
    }

    fn expand(&mut self, frontier: Vec<&'a ProjectView>, depth: usize) {
        if frontier.is_empty() {
            return;
        }

        trace!(depth, frontier = frontier.len(), "Expanding frontier");

        let mut next: Vec<&'a ProjectView> = Vec::new();
        let mut queued: HashSet<u64> = HashSet::new();

        for source in frontier {
            self.graph.add_node(GraphNode::from(source));

            if depth >= self.max_depth || self.already_expanded(source.id, depth) {
                continue;
            }
            self.expanded.insert(source.id, depth);

            let mut seen = HashSet::new();
            for summary in self.relation(source) {
                if !seen.insert(summary.id) {
                    continue;
                }

                let Some(&target) = self.catalogue.get(&summary.id) else {
                    trace!(source = source.id, target = summary.id, "Target not in catalogue");
                    continue;
                };

                self.graph.add_node(GraphNode::from(target));

                let (from, to) = match self.mode {
                    GraphMode::Uses => (source.id, target.id),
                    GraphMode::UsedBy => (target.id, source.id),
                };
                self.graph.add_edge(from, to);

                if queued.insert(target.id) {
                    next.push(target);
                }
            }
        }

        self.expand(next, depth + 1);
    }
}

/// Run a bounded traversal and return the deduplicated graph
pub fn traverse<'a, I>(
    catalogue: &'a [ProjectView],
    seeds: I,
    mode: GraphMode,
    max_depth: usize,
) -> ProjectGraph
where
    I: IntoIterator<Item = &'a ProjectView>,
{
    let mut context = TraversalContext::new(catalogue, mode, max_depth);
    context.run(seeds);
    context.into_graph()
}

/// Pick the seed projects: the one whose permalink matches, or all of them
pub fn select_seeds<'a>(catalogue: &'a [ProjectView], permalink: Option<&str>) -> Vec<&'a ProjectView> {
    match permalink {
        Some(permalink) => catalogue
            .iter()
            .filter(|view| view.permalink == permalink)
            .collect(),
        None => catalogue.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    include!("traversal.test.rs");
}

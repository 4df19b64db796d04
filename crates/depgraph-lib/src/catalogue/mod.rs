//! # Catalogue Module
//!
//! Graph assembly and bounded traversal over a registry snapshot.
//!
//! ## Modules
//!
//! - [`records`] - Raw registry records and the joined per-project views
//! - [`filter`] - Product/category membership filter
//! - [`join`] - Link resolution producing `uses`/`used_by` per project
//! - [`graph`] - Deduplicated directed graph of projects
//! - [`traversal`] - Depth-bounded expansion from seed projects
//!
//! Everything here is synchronous and free of I/O.

pub mod filter;
pub mod graph;
pub mod join;
pub mod records;
pub mod traversal;

pub use filter::{FilterOutcome, ProjectFilter, filter_collection, filter_collection_with_outcome, matches};
pub use graph::{GraphNode, ProjectGraph};
pub use join::build_catalogue;
pub use records::{DependencyLinkRecord, ProjectRecord, ProjectSummary, ProjectView, UNKNOWN_OWNER};
pub use traversal::{DEFAULT_MAX_DEPTH, TraversalContext, select_seeds, traverse};

pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{RegistryServer, graph_args, isolated_config};

//! Registry fixtures shared by unit and end-to-end tests
//!
//! Compiled for this crate's tests and for dependents enabling the
//! `test-utils` feature.

use crate::catalogue::{DependencyLinkRecord, ProjectRecord};
use crate::registry::RegistrySnapshot;

/// Builds a registry snapshot from "uses" pairs, filling in both link lists
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    projects: Vec<ProjectRecord>,
    links: Vec<DependencyLinkRecord>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project owned by `owner` in `products`
    pub fn project(mut self, id: u64, permalink: &str, owner: &str, products: &[&str]) -> Self {
        self.projects.push(ProjectRecord {
            id,
            permalink: permalink.to_string(),
            name: permalink.to_string(),
            owner: Some(owner.to_string()),
            products: products.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        });
        self
    }

    /// Record that `consumer` uses `dependency`
    pub fn uses(mut self, consumer: u64, dependency: u64) -> Self {
        let link_id = 1000 + self.links.len() as u64;
        self.links.push(DependencyLinkRecord {
            id: link_id,
            providing_project_id: Some(dependency),
            dependent_project_id: Some(consumer),
        });

        for project in &mut self.projects {
            if project.id == consumer {
                project.dependent_project_dependencies_ids.push(link_id);
            }
            if project.id == dependency {
                project.providing_project_dependencies_ids.push(link_id);
            }
        }
        self
    }

    pub fn build(self) -> RegistrySnapshot {
        RegistrySnapshot::new(self.projects, self.links)
    }
}

/// `a` uses `b` uses `c` uses `d`
pub fn chain_snapshot() -> RegistrySnapshot {
    SnapshotBuilder::new()
        .project(1, "a", "Core", &["Support"])
        .project(2, "b", "Core", &["Support"])
        .project(3, "c", "Data", &["Chat"])
        .project(4, "d", "Data", &[])
        .uses(1, 2)
        .uses(2, 3)
        .uses(3, 4)
        .build()
}

/// `a` uses `b` and `c`, both of which use `d`
pub fn diamond_snapshot() -> RegistrySnapshot {
    SnapshotBuilder::new()
        .project(1, "a", "Core", &["Support"])
        .project(2, "b", "Core", &["Support"])
        .project(3, "c", "Core", &["Support"])
        .project(4, "d", "Data", &["Support"])
        .uses(1, 2)
        .uses(1, 3)
        .uses(2, 4)
        .uses(3, 4)
        .build()
}

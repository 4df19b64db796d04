//! Catalogue join
//!
//! Cross-references raw project records with raw dependency-link records and
//! produces one [`ProjectView`] per project that passes the filter. A link
//! record is the only place a "uses" direction is stored, so each relation
//! is resolved in two hops: link id -> link -> project id -> project.

use super::filter::{ProjectFilter, filter_collection_with_outcome, matches};
use super::records::{DependencyLinkRecord, ProjectRecord, ProjectSummary, ProjectView};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Which end of a link a relation resolves to
#[derive(Debug, Clone, Copy)]
enum LinkEnd {
    Providing,
    Dependent,
}

/// Id-indexed lookups over one registry snapshot
struct CatalogueIndex<'a> {
    projects: HashMap<u64, &'a ProjectRecord>,
    links: HashMap<u64, &'a DependencyLinkRecord>,
}

impl<'a> CatalogueIndex<'a> {
    fn new(projects: &'a [ProjectRecord], links: &'a [DependencyLinkRecord]) -> Self {
        let mut project_map = HashMap::with_capacity(projects.len());
        for project in projects {
            project_map.entry(project.id).or_insert(project);
        }

        let mut link_map = HashMap::with_capacity(links.len());
        for link in links {
            link_map.entry(link.id).or_insert(link);
        }

        Self {
            projects: project_map,
            links: link_map,
        }
    }

    /// Resolve link ids to summaries of the projects at `end`, strict-filtered
    fn resolve(
        &self,
        owner_id: u64,
        link_ids: &[u64],
        end: LinkEnd,
        filter: &ProjectFilter,
    ) -> Vec<ProjectSummary> {
        let mut resolved = Vec::new();

        for link_id in link_ids {
            let Some(link) = self.links.get(link_id) else {
                trace!(project = owner_id, link = link_id, "Skipping unknown dependency link");
                continue;
            };

            let endpoint = match end {
                LinkEnd::Providing => link.providing_project_id,
                LinkEnd::Dependent => link.dependent_project_id,
            };
            let Some(target_id) = endpoint else {
                trace!(project = owner_id, link = link_id, "Skipping link without a target project");
                continue;
            };

            let Some(target) = self.projects.get(&target_id) else {
                trace!(
                    project = owner_id,
                    link = link_id,
                    target = target_id,
                    "Skipping link to unknown project"
                );
                continue;
            };

            if matches(target, filter) {
                resolved.push(ProjectSummary::from(*target));
            }
        }

        resolved
    }
}

/// Join projects and links into views for every project passing `filter`
///
/// The top-level selection uses the fallback filter, so an over-narrow filter
/// still yields the full catalogue. Relation targets use the strict
/// predicate. Unknown link or project ids are skipped.
pub fn build_catalogue(
    projects: &[ProjectRecord],
    links: &[DependencyLinkRecord],
    filter: &ProjectFilter,
) -> Vec<ProjectView> {
    let index = CatalogueIndex::new(projects, links);
    let selection = filter_collection_with_outcome(projects, filter);

    debug!(
        total = projects.len(),
        selected = selection.projects.len(),
        links = links.len(),
        fell_back = selection.fell_back,
        "Joining catalogue"
    );

    selection
        .projects
        .into_iter()
        .map(|record| {
            let mut view = ProjectView::from_record(record);
            view.uses = index.resolve(
                record.id,
                &record.dependent_project_dependencies_ids,
                LinkEnd::Providing,
                filter,
            );
            view.used_by = index.resolve(
                record.id,
                &record.providing_project_dependencies_ids,
                LinkEnd::Dependent,
                filter,
            );
            view
        })
        .collect()
}

#[cfg(test)]
mod tests {
    include!("join.test.rs");
}

//! Product/category membership filter
//!
//! Two distinct operations with different contracts:
//!
//! - [`matches`] is the strict predicate used when resolving a single
//!   dependency target during the join.
//! - [`filter_collection`] applies the predicate to the whole catalogue and
//!   falls back to the unfiltered input when nothing matches.

use super::records::ProjectRecord;
use tracing::debug;

/// Filter value that disables an axis, same as leaving it unset
pub const WILDCARD: &str = "*";

/// Product and category filter strings
///
/// Each filter is matched by containment: a project product (or category)
/// passes when it appears, case-insensitively, inside the filter string.
/// `"Foundation,Platform"` therefore matches projects in either product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub product: Option<String>,
    pub category: Option<String>,
}

impl ProjectFilter {
    pub fn new(product: Option<String>, category: Option<String>) -> Self {
        Self { product, category }
    }

    /// True when neither axis narrows anything
    pub fn is_unrestricted(&self) -> bool {
        active(&self.product).is_none() && active(&self.category).is_none()
    }
}

/// Result of filtering a whole collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub projects: Vec<&'a ProjectRecord>,
    /// Set when no project matched and the unfiltered input was returned
    pub fell_back: bool,
}

/// Lowercased filter text, or `None` when the axis is unset, blank or `*`
fn active(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != WILDCARD)
        .map(str::to_lowercase)
}

fn matches_product(project: &ProjectRecord, filter: Option<&str>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    // Unclassified projects are never excluded by a product filter
    project.products.is_empty()
        || project
            .products
            .iter()
            .any(|product| filter.contains(&product.to_lowercase()))
}

fn matches_category(project: &ProjectRecord, filter: Option<&str>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    match project.category.as_deref() {
        None | Some("") => true,
        Some(category) => filter.contains(&category.to_lowercase()),
    }
}

/// Strict membership test, no fallback
pub fn matches(project: &ProjectRecord, filter: &ProjectFilter) -> bool {
    let product = active(&filter.product);
    let category = active(&filter.category);

    matches_product(project, product.as_deref()) && matches_category(project, category.as_deref())
}

/// Filter a collection, reporting whether the empty-result fallback was used
pub fn filter_collection_with_outcome<'a>(
    projects: &'a [ProjectRecord],
    filter: &ProjectFilter,
) -> FilterOutcome<'a> {
    if filter.is_unrestricted() {
        return FilterOutcome {
            projects: projects.iter().collect(),
            fell_back: false,
        };
    }

    let matched: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|project| matches(project, filter))
        .collect();

    if matched.is_empty() && !projects.is_empty() {
        debug!(
            product = ?filter.product,
            category = ?filter.category,
            "No project matched the filter, using the unfiltered catalogue"
        );
        return FilterOutcome {
            projects: projects.iter().collect(),
            fell_back: true,
        };
    }

    FilterOutcome {
        projects: matched,
        fell_back: false,
    }
}

/// Filter a collection; an empty result yields the original collection
pub fn filter_collection<'a>(
    projects: &'a [ProjectRecord],
    filter: &ProjectFilter,
) -> Vec<&'a ProjectRecord> {
    filter_collection_with_outcome(projects, filter).projects
}

#[cfg(test)]
mod tests {
    include!("filter.test.rs");
}

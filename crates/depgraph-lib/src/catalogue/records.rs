//! Raw registry records and the derived per-project views
//!
//! `ProjectRecord` and `DependencyLinkRecord` mirror the registry payload
//! field-for-field (only the fields the join reads). `ProjectView` is the
//! joined, self-contained output unit.

use serde::{Deserialize, Deserializer, Serialize};

/// Owner reported when the registry has no stakeholder for a project
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Treat an explicit JSON `null` the same as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A project as returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "nickname")]
    pub alias: Option<String>,
    #[serde(default, rename = "project_stakeholder_owner_name")]
    pub owner: Option<String>,
    #[serde(
        default,
        rename = "product_names",
        deserialize_with = "null_as_default"
    )]
    pub products: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    /// Link ids where this project is the consumer
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependent_project_dependencies_ids: Vec<u64>,
    /// Link ids where this project is the dependency being used
    #[serde(default, deserialize_with = "null_as_default")]
    pub providing_project_dependencies_ids: Vec<u64>,
}

impl ProjectRecord {
    /// Owner name, falling back to [`UNKNOWN_OWNER`]
    pub fn owner_or_unknown(&self) -> &str {
        self.owner
            .as_deref()
            .filter(|owner| !owner.is_empty())
            .unwrap_or(UNKNOWN_OWNER)
    }

    /// Fan-out count used as a popularity signal
    pub fn weighting(&self) -> usize {
        self.dependent_project_dependencies_ids.len()
    }
}

/// A single "uses" relationship between two projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyLinkRecord {
    pub id: u64,
    /// The dependency being used, `None` when the registry left it blank
    #[serde(default)]
    pub providing_project_id: Option<u64>,
    /// The consumer
    #[serde(default)]
    pub dependent_project_id: Option<u64>,
}

/// Abbreviated project entry attached to another project's `uses`/`used_by`
///
/// Has no relation lists of its own, so a nested entry can never be expanded
/// a second level by the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub permalink: String,
    pub name: String,
    pub alias: Option<String>,
    pub owner: String,
    pub products: Vec<String>,
    pub weighting: usize,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            permalink: record.permalink.clone(),
            name: record.name.clone(),
            alias: record.alias.clone(),
            owner: record.owner_or_unknown().to_string(),
            products: record.products.clone(),
            weighting: record.weighting(),
        }
    }
}

/// Joined view of one project with its resolved relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: u64,
    pub permalink: String,
    pub name: String,
    pub alias: Option<String>,
    pub owner: String,
    pub products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub weighting: usize,
    pub uses: Vec<ProjectSummary>,
    pub used_by: Vec<ProjectSummary>,
}

impl ProjectView {
    /// View with empty relation lists, ready for the join to fill in
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            permalink: record.permalink.clone(),
            name: record.name.clone(),
            alias: record.alias.clone(),
            owner: record.owner_or_unknown().to_string(),
            products: record.products.clone(),
            category: record.category.clone(),
            tier: record.tier.clone(),
            description: record.description.clone(),
            weighting: record.weighting(),
            uses: Vec::new(),
            used_by: Vec::new(),
        }
    }

    /// Graph node label: `"{permalink} [{owner}]"`
    pub fn label(&self) -> String {
        format!("{} [{}]", self.permalink, self.owner)
    }
}

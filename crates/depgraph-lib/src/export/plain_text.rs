//! Plain English export
//!
//! Each project produces an ownership sentence, an optional description
//! sentence, and one sentence per `uses` and `used_by` entry. Sentences are
//! handlebars templates embedded at compile time.

use super::{ExportError, write_file};
use crate::catalogue::{ProjectSummary, ProjectView};
use handlebars::Handlebars;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

const PROJECT_TEMPLATE: &str = "project";
const DESCRIPTION_TEMPLATE: &str = "description";
const USES_TEMPLATE: &str = "uses";
const USED_BY_TEMPLATE: &str = "used_by";

/// Shown when a project lists no products
const NO_PRODUCTS: &str = "Unknown";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid url pattern"));

/// Human-friendly name: `-`/`_` become spaces, runs of whitespace collapse
fn display_name(name: &str) -> String {
    collapse_whitespace(&name.replace(['-', '_'], " "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn display_products(products: &[String]) -> String {
    if products.is_empty() {
        NO_PRODUCTS.to_string()
    } else {
        products.join(",")
    }
}

/// Strip markup and links from a free-text description
///
/// Entities are decoded before tags are removed, so encoded markup is
/// stripped too. URLs become `[link removed]` and whitespace collapses.
pub fn sanitize_description(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    let without_tags = TAG_PATTERN.replace_all(&decoded, " ");
    let without_links = URL_PATTERN.replace_all(&without_tags, "[link removed]");
    collapse_whitespace(&without_links)
}

#[derive(Serialize)]
struct Party {
    name: String,
    products: String,
    owner: String,
}

impl From<&ProjectSummary> for Party {
    fn from(summary: &ProjectSummary) -> Self {
        Self {
            name: display_name(&summary.name),
            products: display_products(&summary.products),
            owner: summary.owner.clone(),
        }
    }
}

#[derive(Serialize)]
struct ProjectContext<'a> {
    name: &'a str,
    products: &'a str,
    owner: &'a str,
    description: Option<String>,
}

#[derive(Serialize)]
struct RelationContext<'a> {
    name: &'a str,
    other: Party,
}

/// Renders project views as plain English sentences
pub struct PlainTextWriter {
    handlebars: Handlebars<'static>,
}

impl Default for PlainTextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextWriter {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        let _ = handlebars.register_template_string(
            PROJECT_TEMPLATE,
            include_str!("../../templates/plain_english/project.hbs").trim_end(),
        );
        let _ = handlebars.register_template_string(
            DESCRIPTION_TEMPLATE,
            include_str!("../../templates/plain_english/description.hbs").trim_end(),
        );
        let _ = handlebars.register_template_string(
            USES_TEMPLATE,
            include_str!("../../templates/plain_english/uses.hbs").trim_end(),
        );
        let _ = handlebars.register_template_string(
            USED_BY_TEMPLATE,
            include_str!("../../templates/plain_english/used_by.hbs").trim_end(),
        );

        Self { handlebars }
    }

    /// All sentences for one project, in output order
    pub fn sentences(&self, view: &ProjectView) -> Result<Vec<String>, ExportError> {
        let name = display_name(&view.name);
        let products = display_products(&view.products);

        let description = view
            .description
            .as_deref()
            .map(sanitize_description)
            .filter(|text| !text.is_empty());

        let project = ProjectContext {
            name: &name,
            products: &products,
            owner: &view.owner,
            description,
        };

        let mut lines = vec![self.handlebars.render(PROJECT_TEMPLATE, &project)?];
        if project.description.is_some() {
            lines.push(self.handlebars.render(DESCRIPTION_TEMPLATE, &project)?);
        }

        for used in &view.uses {
            let relation = RelationContext {
                name: &name,
                other: Party::from(used),
            };
            lines.push(self.handlebars.render(USES_TEMPLATE, &relation)?);
        }

        for dependent in &view.used_by {
            let relation = RelationContext {
                name: &name,
                other: Party::from(dependent),
            };
            lines.push(self.handlebars.render(USED_BY_TEMPLATE, &relation)?);
        }

        Ok(lines)
    }

    /// Render every view, one sentence per line
    pub fn render(&self, views: &[ProjectView]) -> Result<String, ExportError> {
        let mut output = String::new();
        for view in views {
            for line in self.sentences(view)? {
                output.push_str(&line);
                output.push('\n');
            }
        }
        Ok(output)
    }

    /// Render `views` and write them to `path`
    pub fn write(&self, path: &Path, views: &[ProjectView]) -> Result<(), ExportError> {
        let body = self.render(views)?;
        write_file(path, body.as_bytes())?;
        debug!(path = %path.display(), projects = views.len(), "Plain English export written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("plain_text.test.rs");
}

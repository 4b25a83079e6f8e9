//! Project list filtering for the Projects page.
//!
//! DESIGN
//! ======
//! Category and free-text query are applied in that order over the static
//! catalog. The page feeds the query through a debouncer, so `filter` runs at
//! most once per settled keystroke burst.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::content::projects::Project;

pub const ALL_CATEGORIES: &str = "All";

/// `"All"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for project in projects {
        if !out.contains(&project.category) {
            out.push(project.category);
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: String,
    pub query: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_owned(),
            query: String::new(),
        }
    }
}

impl ProjectFilter {
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORIES && self.query.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if self.category != ALL_CATEGORIES && project.category != self.category {
            return false;
        }
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [project.title, project.description, project.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Result line shown above the grid.
    #[must_use]
    pub fn summary(&self, count: usize) -> String {
        let noun = if count == 1 { "project" } else { "projects" };
        let mut out = format!("Showing {count} {noun}");
        if self.category != ALL_CATEGORIES {
            out.push_str(" in ");
            out.push_str(&self.category);
        }
        let query = self.query.trim();
        if !query.is_empty() {
            out.push_str(&format!(" matching \"{query}\""));
        }
        out
    }
}

pub const EMPTY_RESULTS: &str = "No projects found matching your criteria.";

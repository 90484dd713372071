//! Issue filtering
//!
//! A pure pass over the store's issue list. Criteria combine with AND;
//! unset criteria impose no constraint, so the default filter is the
//! identity.

use crate::geo::Coordinates;
use crate::model::{Category, Issue, IssueStatus};

/// Criteria narrowing the visible issue set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    /// Exact category match
    pub category: Option<Category>,

    /// Exact status match
    pub status: Option<IssueStatus>,

    /// Case-insensitive substring match against title or description
    pub search: Option<String>,

    /// Greatest allowed distance from the filter origin, in miles
    pub radius_miles: Option<f64>,
}

impl IssueFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.search.is_none()
            && self.radius_miles.is_none()
    }

    /// Whether one issue passes every set criterion
    pub fn matches(&self, issue: &Issue, origin: Coordinates) -> bool {
        if let Some(category) = self.category {
            if issue.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = issue.title.to_lowercase().contains(&needle);
            let in_description = issue.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(radius) = self.radius_miles {
            if !origin.within_radius(&issue.location, radius) {
                return false;
            }
        }
        true
    }
}

/// Filter `issues` down to those passing every criterion
///
/// Returns clones in input order; the input is never mutated. `origin` is
/// the reference point for the radius criterion and is ignored when no
/// radius is set.
pub fn apply(issues: &[Issue], filter: &IssueFilter, origin: Coordinates) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| filter.matches(issue, origin))
        .cloned()
        .collect()
}

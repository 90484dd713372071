//! Civic issue data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Coordinates;

/// Issue status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    /// Issue has been reported and awaits triage
    Reported,
    /// A crew or department is working on the issue
    InProgress,
    /// Issue has been resolved
    Resolved,
}

impl IssueStatus {
    /// All statuses in lifecycle order, for select widgets
    pub const ALL: [IssueStatus; 3] = [Self::Reported, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "reported",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human-readable form for badges and legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for IssueStatus {
    fn from(s: &str) -> Self {
        match s {
            "reported" => Self::Reported,
            "in-progress" => Self::InProgress,
            "resolved" => Self::Resolved,
            _ => Self::Reported,
        }
    }
}

/// Issue category enumeration
///
/// The fixed set offered by the report form and the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Potholes, cracked pavement, damaged signage
    #[serde(rename = "Road Maintenance")]
    RoadMaintenance,
    /// Broken or flickering street lights
    #[serde(rename = "Street Lighting")]
    StreetLighting,
    /// Overflowing bins, missed collections, illegal dumping
    #[serde(rename = "Waste Management")]
    WasteManagement,
    /// Playgrounds, trails, and park facilities
    #[serde(rename = "Parks & Recreation")]
    ParksRecreation,
    /// Vandalism, graffiti, hazards to the public
    #[serde(rename = "Public Safety")]
    PublicSafety,
    /// After-hours construction and other noise
    #[serde(rename = "Noise Complaint")]
    NoiseComplaint,
    /// Anything that fits no other category
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in form order, for select widgets
    pub const ALL: [Category; 7] = [
        Self::RoadMaintenance,
        Self::StreetLighting,
        Self::WasteManagement,
        Self::ParksRecreation,
        Self::PublicSafety,
        Self::NoiseComplaint,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoadMaintenance => "Road Maintenance",
            Self::StreetLighting => "Street Lighting",
            Self::WasteManagement => "Waste Management",
            Self::ParksRecreation => "Parks & Recreation",
            Self::PublicSafety => "Public Safety",
            Self::NoiseComplaint => "Noise Complaint",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "Road Maintenance" => Self::RoadMaintenance,
            "Street Lighting" => Self::StreetLighting,
            "Waste Management" => Self::WasteManagement,
            "Parks & Recreation" => Self::ParksRecreation,
            "Public Safety" => Self::PublicSafety,
            "Noise Complaint" => Self::NoiseComplaint,
            _ => Self::Other,
        }
    }
}

/// Comment on an issue
///
/// Owned by its parent issue; append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier (UUID string)
    pub id: String,

    /// Display name of the commenter
    pub author: String,

    /// Comment body
    pub content: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a generated id and the current timestamp
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// One entry in an issue's status history
///
/// The audit trail is append-only; the first entry is always `Reported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Status the issue entered
    pub status: IssueStatus,

    /// When the transition happened
    pub timestamp: DateTime<Utc>,

    /// Optional note from whoever made the transition
    pub note: Option<String>,
}

impl StatusEntry {
    pub fn new(status: IssueStatus, note: Option<String>) -> Self {
        Self {
            status,
            timestamp: Utc::now(),
            note,
        }
    }
}

/// A reported civic issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique issue identifier (UUID string)
    pub id: String,

    /// Short summary shown in lists and map popups
    pub title: String,

    /// Detailed description of the problem
    pub description: String,

    /// Issue category
    pub category: Category,

    /// Current lifecycle status
    pub status: IssueStatus,

    /// Where the issue is located
    pub location: Coordinates,

    /// Display name of the reporter
    pub author: String,

    /// When the issue was reported
    pub created_at: DateTime<Utc>,

    /// Community vote count; only ever increments
    pub votes: u32,

    /// Optional photo reference (path or URL)
    pub photo: Option<String>,

    /// Comments in insertion order
    pub comments: Vec<Comment>,

    /// Status history in insertion order; never empty
    pub history: Vec<StatusEntry>,
}

impl Issue {
    /// Create a new issue in the `Reported` state
    ///
    /// Generates a fresh UUID id, stamps the current time, and seeds the
    /// history with a single `Reported` entry.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        location: Coordinates,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            category,
            status: IssueStatus::Reported,
            location,
            author: author.into(),
            created_at: Utc::now(),
            votes: 0,
            photo: None,
            comments: Vec::new(),
            history: vec![StatusEntry::new(
                IssueStatus::Reported,
                Some("Issue reported".to_string()),
            )],
        }
    }

    /// Builder: attach a photo reference
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Mark the issue as being worked on, appending to the history
    pub fn mark_in_progress(&mut self, note: Option<String>) {
        self.status = IssueStatus::InProgress;
        self.history.push(StatusEntry::new(IssueStatus::InProgress, note));
    }

    /// Mark the issue as resolved, appending to the history
    pub fn mark_resolved(&mut self, note: Option<String>) {
        self.status = IssueStatus::Resolved;
        self.history.push(StatusEntry::new(IssueStatus::Resolved, note));
    }

    pub fn is_resolved(&self) -> bool {
        self.status == IssueStatus::Resolved
    }
}

/// Payload for submitting a new issue
///
/// Collected by the report form; the store turns it into a stored [`Issue`].
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    /// Short summary (required, non-empty)
    pub title: String,

    /// Detailed description (required, non-empty)
    pub description: String,

    /// Issue category (required)
    pub category: Category,

    /// Where the issue is located
    pub location: Coordinates,

    /// Display name of the reporter
    pub author: String,

    /// Optional photo reference
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::new(
            "Cracked sidewalk",
            "Large crack near the bus stop",
            Category::RoadMaintenance,
            Coordinates::new(37.77, -122.42),
            "Test Reporter",
        );
        assert_eq!(issue.status, IssueStatus::Reported);
        assert_eq!(issue.votes, 0);
        assert!(issue.comments.is_empty());
        assert_eq!(issue.history.len(), 1);
        assert_eq!(issue.history[0].status, IssueStatus::Reported);
        assert_eq!(issue.history[0].note.as_deref(), Some("Issue reported"));
        assert!(issue.photo.is_none());
    }

    #[test]
    fn test_issue_lifecycle() {
        let mut issue = Issue::new(
            "Cracked sidewalk",
            "Large crack near the bus stop",
            Category::RoadMaintenance,
            Coordinates::new(37.77, -122.42),
            "Test Reporter",
        );

        issue.mark_in_progress(Some("Crew dispatched".to_string()));
        assert_eq!(issue.status, IssueStatus::InProgress);
        assert!(!issue.is_resolved());

        issue.mark_resolved(None);
        assert!(issue.is_resolved());
        assert_eq!(issue.history.len(), 3);
        assert_eq!(issue.history[1].status, IssueStatus::InProgress);
        assert_eq!(issue.history[2].status, IssueStatus::Resolved);
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(IssueStatus::from("reported"), IssueStatus::Reported);
        assert_eq!(IssueStatus::from("in-progress"), IssueStatus::InProgress);
        assert_eq!(IssueStatus::from("resolved"), IssueStatus::Resolved);
        assert_eq!(IssueStatus::from("garbage"), IssueStatus::Reported);
        assert_eq!(IssueStatus::InProgress.as_str(), "in-progress");
        assert_eq!(IssueStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: IssueStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(back, IssueStatus::Resolved);
    }

    #[test]
    fn test_category_conversion() {
        for category in Category::ALL {
            assert_eq!(Category::from(category.as_str()), category);
        }
        assert_eq!(Category::from("Underwater Basket Weaving"), Category::Other);
        let json = serde_json::to_string(&Category::ParksRecreation).unwrap();
        assert_eq!(json, "\"Parks & Recreation\"");
    }

    #[test]
    fn test_with_photo() {
        let issue = Issue::new(
            "Graffiti",
            "Tag on the library wall",
            Category::PublicSafety,
            Coordinates::new(37.77, -122.42),
            "Test Reporter",
        )
        .with_photo("/photos/graffiti.jpg");
        assert_eq!(issue.photo.as_deref(), Some("/photos/graffiti.jpg"));
    }
}

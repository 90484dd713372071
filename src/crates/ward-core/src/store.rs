//! In-memory issue store
//!
//! The store is the single owner of all issue records for the life of the
//! process. Callers hold it by value and pass `&mut` into mutation paths;
//! there is no global instance.

use tracing::debug;

use crate::model::{Comment, Issue, IssueDraft, IssueStatus};
use crate::seed;

/// Store-wide issue counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub reported: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.reported + self.in_progress + self.resolved
    }
}

/// Ordered collection of issues, most recently reported first
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Create a store pre-populated with the demo dataset
    pub fn with_seed() -> Self {
        Self {
            issues: seed::demo_issues(),
        }
    }

    /// Create a store from an explicit issue list, preserving its order
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// All issues in store order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn get(&self, issue_id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == issue_id)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Create an issue from a submitted draft and prepend it to the store
    ///
    /// The new issue starts with zero votes, no comments, and a single
    /// `Reported` history entry. Returns a clone of the stored record.
    pub fn create_issue(&mut self, draft: IssueDraft) -> Issue {
        let mut issue = Issue::new(
            draft.title,
            draft.description,
            draft.category,
            draft.location,
            draft.author,
        );
        if let Some(photo) = draft.photo {
            issue = issue.with_photo(photo);
        }
        debug!(issue_id = %issue.id, title = %issue.title, "issue created");
        self.issues.insert(0, issue.clone());
        issue
    }

    /// Add one vote to an issue
    ///
    /// Returns `false` and leaves the store untouched when the id is
    /// unknown. Not idempotent: every call with a known id counts.
    pub fn vote(&mut self, issue_id: &str) -> bool {
        match self.issues.iter_mut().find(|i| i.id == issue_id) {
            Some(issue) => {
                issue.votes += 1;
                debug!(issue_id, votes = issue.votes, "vote recorded");
                true
            }
            None => false,
        }
    }

    /// Append a comment to an issue
    ///
    /// Whitespace-only content is rejected. Content is stored exactly as
    /// passed, untrimmed.
    pub fn add_comment(&mut self, issue_id: &str, author: &str, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        match self.issues.iter_mut().find(|i| i.id == issue_id) {
            Some(issue) => {
                issue.comments.push(Comment::new(author, content));
                debug!(issue_id, "comment added");
                true
            }
            None => false,
        }
    }

    /// Issue counts by status across the whole store
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for issue in &self.issues {
            match issue.status {
                IssueStatus::Reported => counts.reported += 1,
                IssueStatus::InProgress => counts.in_progress += 1,
                IssueStatus::Resolved => counts.resolved += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::model::Category;

    fn draft() -> IssueDraft {
        IssueDraft {
            title: "Leaning stop sign".into(),
            description: "Stop sign at 5th and Birch is leaning badly".into(),
            category: Category::RoadMaintenance,
            location: Coordinates::new(37.77, -122.42),
            author: "Anonymous User".into(),
            photo: None,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = IssueStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("1").is_none());
    }

    #[test]
    fn test_seeded_store() {
        let store = IssueStore::with_seed();
        assert_eq!(store.len(), 6);
        assert_eq!(store.get("1").map(|i| i.title.as_str()), Some("Pothole on Main Street"));
    }

    #[test]
    fn test_create_issue_invariants() {
        let mut store = IssueStore::with_seed();
        let issue = store.create_issue(draft());

        assert_eq!(issue.votes, 0);
        assert!(issue.comments.is_empty());
        assert_eq!(issue.history.len(), 1);
        assert_eq!(issue.history[0].status, IssueStatus::Reported);

        // Newest first, seed order intact behind it.
        assert_eq!(store.len(), 7);
        assert_eq!(store.issues()[0].id, issue.id);
        assert_eq!(store.issues()[1].id, "1");
        assert_eq!(store.issues()[6].id, "6");
    }

    #[test]
    fn test_create_issue_keeps_photo() {
        let mut store = IssueStore::new();
        let mut d = draft();
        d.photo = Some("/photos/sign.jpg".into());
        let issue = store.create_issue(d);
        assert_eq!(issue.photo.as_deref(), Some("/photos/sign.jpg"));
    }

    #[test]
    fn test_vote_known_id() {
        let mut store = IssueStore::with_seed();
        assert!(store.vote("2"));
        assert_eq!(store.get("2").map(|i| i.votes), Some(9));

        // No other issue moved.
        for (id, votes) in [("1", 12), ("3", 15), ("4", 6), ("5", 9), ("6", 4)] {
            assert_eq!(store.get(id).map(|i| i.votes), Some(votes));
        }
    }

    #[test]
    fn test_vote_unknown_id() {
        let mut store = IssueStore::with_seed();
        let before: Vec<_> = store.issues().to_vec();
        assert!(!store.vote("999"));
        assert_eq!(store.issues(), &before[..]);
    }

    #[test]
    fn test_vote_counts_every_call() {
        let mut store = IssueStore::with_seed();
        assert!(store.vote("4"));
        assert!(store.vote("4"));
        assert_eq!(store.get("4").map(|i| i.votes), Some(8));
    }

    #[test]
    fn test_add_comment() {
        let mut store = IssueStore::with_seed();
        assert!(store.add_comment("1", "Current User", "  any update on this? "));

        let issue = store.get("1").unwrap();
        assert_eq!(issue.comments.len(), 3);
        let last = issue.comments.last().unwrap();
        assert_eq!(last.author, "Current User");
        // Stored untrimmed.
        assert_eq!(last.content, "  any update on this? ");
    }

    #[test]
    fn test_add_comment_rejects_blank() {
        let mut store = IssueStore::with_seed();
        assert!(!store.add_comment("1", "Current User", ""));
        assert!(!store.add_comment("1", "Current User", "   \t "));
        assert_eq!(store.get("1").map(|i| i.comments.len()), Some(2));
    }

    #[test]
    fn test_add_comment_unknown_id() {
        let mut store = IssueStore::with_seed();
        assert!(!store.add_comment("999", "Current User", "hello"));
    }

    #[test]
    fn test_status_counts() {
        let store = IssueStore::with_seed();
        let counts = store.status_counts();
        assert_eq!(counts.reported, 2);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.resolved, 2);
        assert_eq!(counts.total(), 6);
    }
}

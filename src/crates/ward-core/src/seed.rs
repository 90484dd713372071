//! Built-in demo dataset
//!
//! Six issues around downtown San Francisco used to seed the store so the
//! map has content on first launch. Ids "1" through "6" are fixed.

use chrono::{DateTime, TimeZone, Utc};

use crate::geo::Coordinates;
use crate::model::{Category, Comment, Issue, IssueStatus, StatusEntry};

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// The six demo issues in their canonical order
pub fn demo_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "1".into(),
            title: "Pothole on Main Street".into(),
            description: "Large pothole near the intersection of Main St and Oak Ave. It's been \
                          growing larger after recent rains and is causing damage to vehicles. \
                          The hole is approximately 2 feet wide and 6 inches deep."
                .into(),
            category: Category::RoadMaintenance,
            status: IssueStatus::Reported,
            location: Coordinates::new(37.7849, -122.4094),
            author: "Sarah Johnson".into(),
            created_at: ts(2024, 1, 15, 10, 30),
            votes: 12,
            photo: Some("/placeholder.svg?height=300&width=400".into()),
            comments: vec![
                Comment {
                    id: "1".into(),
                    author: "Mike Chen".into(),
                    content: "I hit this pothole yesterday and it damaged my tire. This needs to \
                              be fixed ASAP!"
                        .into(),
                    created_at: ts(2024, 1, 15, 14, 20),
                },
                Comment {
                    id: "2".into(),
                    author: "City Worker".into(),
                    content: "Thank you for reporting this. We have added it to our maintenance \
                              queue and will address it within the next week."
                        .into(),
                    created_at: ts(2024, 1, 16, 9, 15),
                },
            ],
            history: vec![StatusEntry {
                status: IssueStatus::Reported,
                timestamp: ts(2024, 1, 15, 10, 30),
                note: Some("Issue reported by community member".into()),
            }],
        },
        Issue {
            id: "2".into(),
            title: "Broken Street Light".into(),
            description: "Street light at the corner of Pine St and 2nd Ave has been out for \
                          over a week. This area gets quite dark at night and poses a safety \
                          concern for pedestrians."
                .into(),
            category: Category::StreetLighting,
            status: IssueStatus::InProgress,
            location: Coordinates::new(37.7749, -122.4194),
            author: "David Rodriguez".into(),
            created_at: ts(2024, 1, 10, 18, 45),
            votes: 8,
            photo: None,
            comments: vec![Comment {
                id: "3".into(),
                author: "Jennifer Liu".into(),
                content: "I walk through this area every evening after work. It's really unsafe \
                          without proper lighting."
                    .into(),
                created_at: ts(2024, 1, 11, 7, 30),
            }],
            history: vec![
                StatusEntry {
                    status: IssueStatus::Reported,
                    timestamp: ts(2024, 1, 10, 18, 45),
                    note: Some("Issue reported by community member".into()),
                },
                StatusEntry {
                    status: IssueStatus::InProgress,
                    timestamp: ts(2024, 1, 12, 11, 0),
                    note: Some("Maintenance crew dispatched to assess and repair".into()),
                },
            ],
        },
        Issue {
            id: "3".into(),
            title: "Overflowing Trash Bin".into(),
            description: "The public trash bin in Riverside Park is consistently overflowing. \
                          Trash is scattered around the area, attracting pests and creating an \
                          unsanitary environment."
                .into(),
            category: Category::WasteManagement,
            status: IssueStatus::Resolved,
            location: Coordinates::new(37.7649, -122.4294),
            author: "Emily Watson".into(),
            created_at: ts(2024, 1, 5, 12, 15),
            votes: 15,
            photo: Some("/placeholder.svg?height=300&width=400".into()),
            comments: vec![Comment {
                id: "4".into(),
                author: "Park Maintenance".into(),
                content: "We have increased the pickup frequency for this location and added an \
                          additional bin nearby."
                    .into(),
                created_at: ts(2024, 1, 8, 10, 0),
            }],
            history: vec![
                StatusEntry {
                    status: IssueStatus::Reported,
                    timestamp: ts(2024, 1, 5, 12, 15),
                    note: Some("Issue reported by community member".into()),
                },
                StatusEntry {
                    status: IssueStatus::InProgress,
                    timestamp: ts(2024, 1, 6, 9, 30),
                    note: Some("Waste management team notified".into()),
                },
                StatusEntry {
                    status: IssueStatus::Resolved,
                    timestamp: ts(2024, 1, 8, 15, 45),
                    note: Some("Additional bin installed and pickup schedule updated".into()),
                },
            ],
        },
        Issue {
            id: "4".into(),
            title: "Playground Equipment Needs Repair".into(),
            description: "The swing set at Maple Grove Playground has a broken chain on one of \
                          the swings. The swing is currently unusable and potentially dangerous."
                .into(),
            category: Category::ParksRecreation,
            status: IssueStatus::Reported,
            location: Coordinates::new(37.7549, -122.4394),
            author: "Robert Kim".into(),
            created_at: ts(2024, 1, 18, 16, 20),
            votes: 6,
            photo: None,
            comments: vec![],
            history: vec![StatusEntry {
                status: IssueStatus::Reported,
                timestamp: ts(2024, 1, 18, 16, 20),
                note: Some("Issue reported by community member".into()),
            }],
        },
        Issue {
            id: "5".into(),
            title: "Loud Construction After Hours".into(),
            description: "Construction work at the new apartment complex on Elm Street continues \
                          well past 10 PM on weekdays, violating city noise ordinances and \
                          disturbing residents."
                .into(),
            category: Category::NoiseComplaint,
            status: IssueStatus::InProgress,
            location: Coordinates::new(37.7949, -122.3994),
            author: "Lisa Thompson".into(),
            created_at: ts(2024, 1, 12, 22, 30),
            votes: 9,
            photo: None,
            comments: vec![Comment {
                id: "5".into(),
                author: "Code Enforcement".into(),
                content: "We have contacted the construction company and issued a warning. \
                          Please continue to report if violations persist."
                    .into(),
                created_at: ts(2024, 1, 13, 8, 45),
            }],
            history: vec![
                StatusEntry {
                    status: IssueStatus::Reported,
                    timestamp: ts(2024, 1, 12, 22, 30),
                    note: Some("Noise complaint filed".into()),
                },
                StatusEntry {
                    status: IssueStatus::InProgress,
                    timestamp: ts(2024, 1, 13, 8, 45),
                    note: Some("Code enforcement investigating".into()),
                },
            ],
        },
        Issue {
            id: "6".into(),
            title: "Graffiti on Public Building".into(),
            description: "Large graffiti tags have appeared on the side wall of the community \
                          center. The graffiti is visible from the main street and detracts from \
                          the neighborhood appearance."
                .into(),
            category: Category::PublicSafety,
            status: IssueStatus::Resolved,
            location: Coordinates::new(37.7449, -122.4494),
            author: "Carlos Martinez".into(),
            created_at: ts(2024, 1, 8, 14, 10),
            votes: 4,
            photo: Some("/placeholder.svg?height=300&width=400".into()),
            comments: vec![Comment {
                id: "6".into(),
                author: "Maintenance Team".into(),
                content: "Graffiti has been removed and we have installed additional lighting in \
                          the area to deter future vandalism."
                    .into(),
                created_at: ts(2024, 1, 10, 11, 30),
            }],
            history: vec![
                StatusEntry {
                    status: IssueStatus::Reported,
                    timestamp: ts(2024, 1, 8, 14, 10),
                    note: Some("Graffiti reported".into()),
                },
                StatusEntry {
                    status: IssueStatus::InProgress,
                    timestamp: ts(2024, 1, 9, 8, 0),
                    note: Some("Cleaning crew scheduled".into()),
                },
                StatusEntry {
                    status: IssueStatus::Resolved,
                    timestamp: ts(2024, 1, 10, 16, 0),
                    note: Some("Graffiti removed and preventive measures installed".into()),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DEFAULT_CENTER;
    use std::collections::HashSet;

    #[test]
    fn test_demo_issue_count() {
        assert_eq!(demo_issues().len(), 6);
    }

    #[test]
    fn test_demo_ids_unique() {
        let issues = demo_issues();
        let ids: HashSet<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), issues.len());
    }

    #[test]
    fn test_demo_histories_well_formed() {
        for issue in demo_issues() {
            assert!(!issue.history.is_empty(), "issue {} has no history", issue.id);
            assert_eq!(issue.history[0].status, IssueStatus::Reported);
            assert_eq!(issue.history[0].timestamp, issue.created_at);
            assert_eq!(issue.history.last().map(|e| e.status), Some(issue.status));
        }
    }

    #[test]
    fn test_demo_statuses() {
        let issues = demo_issues();
        let statuses: Vec<_> = issues.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                IssueStatus::Reported,
                IssueStatus::InProgress,
                IssueStatus::Resolved,
                IssueStatus::Reported,
                IssueStatus::InProgress,
                IssueStatus::Resolved,
            ]
        );
    }

    #[test]
    fn test_demo_issues_near_default_center() {
        // Everything in the demo set sits within the default 5 mile radius.
        for issue in demo_issues() {
            assert!(
                DEFAULT_CENTER.within_radius(&issue.location, 5.0),
                "issue {} is too far from the default center",
                issue.id
            );
        }
    }
}

//! # ward-core
//!
//! Core engine for the Ward civic issue tracker: the issue data model, the
//! in-memory store seeded with a demo dataset, geographic distance math,
//! and the pure filter that narrows the visible issue set.
//!
//! The crate is interface-free: no terminal, no network, no I/O beyond
//! `tracing` events. A front end owns a [`store::IssueStore`], renders
//! whatever [`filter::apply`] returns, and feeds user actions back into
//! the store.

pub mod filter;
pub mod geo;
pub mod model;
pub mod seed;
pub mod store;

// Re-export key types for convenience
pub use filter::IssueFilter;
pub use geo::{Coordinates, DEFAULT_CENTER};
pub use model::{Category, Comment, Issue, IssueDraft, IssueStatus, StatusEntry};
pub use store::{IssueStore, StatusCounts};

//! # Ward - Community Issue Reporter
//!
//! A terminal app for reporting and tracking civic issues: potholes, broken
//! street lights, overflowing bins, and anything else a neighborhood wants
//! fixed. Issues live in an in-memory store seeded with a demo dataset and
//! are browsed on a character-cell map alongside a filterable list.
//!
//! ## Features
//!
//! - **Issue Map** - Status-colored markers on a pannable, zoomable map panel
//! - **Filters** - Search, category, status, and radius combine to narrow the list
//! - **Reporting** - A form overlay that submits new issues with a mock delay
//! - **Votes and Comments** - Lightweight community feedback on every issue
//! - **Geolocation** - Best-effort IP lookup with a configured or default fallback
//! - **Dual-Location Config** - User-level and project-level configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use ward_core::{filter, IssueFilter, IssueStore, DEFAULT_CENTER};
//!
//! let store = IssueStore::with_seed();
//! let visible = filter::apply(store.issues(), &IssueFilter::default(), DEFAULT_CENTER);
//! assert_eq!(visible.len(), store.len());
//! ```
//!
//! ## Architecture
//!
//! The engine lives in `ward-core` and is interface-free; this crate adds
//! configuration, logging, geolocation, and the ratatui front end. The
//! front end owns one [`ward_core::IssueStore`] for the life of the
//! process and re-runs the filter after every mutation.

// Core modules
pub mod config;
pub mod init;
pub mod locate;
pub mod logging;
pub mod tui;

// Error types and utilities
mod error;

// Re-export key types for convenience
pub use config::{load_config, ConfigLoader, WardConfig};
pub use error::{Result, WardError};
pub use locate::{LocationFix, LocationSource};
pub use tui::{run_tui, App};

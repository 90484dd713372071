//! Application state management for TUI

use crate::config::WardConfig;
use crate::locate::{LocationFix, LocationSource};
use crate::tui::detail::DetailCard;
use crate::tui::forms::{Form, FormField};
use crate::tui::map::MapPanel;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use ward_core::{
    filter, Category, Coordinates, Issue, IssueDraft, IssueFilter, IssueStatus, IssueStore,
};

/// Radius preset the sidebar starts at and resets to
pub const DEFAULT_RADIUS_MILES: f64 = 5.0;
const MIN_RADIUS_MILES: f64 = 1.0;
const MAX_RADIUS_MILES: f64 = 25.0;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Browsing,
}

/// Which panel is currently focused in the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedArea {
    Sidebar,
    Map,
    List,
}

/// Which sidebar control is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarField {
    Search,
    Category,
    Status,
    Radius,
    Clear,
}

impl SidebarField {
    const ORDER: [SidebarField; 5] = [
        SidebarField::Search,
        SidebarField::Category,
        SidebarField::Status,
        SidebarField::Radius,
        SidebarField::Clear,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,
}

/// An issue submission waiting out the artificial network delay
#[derive(Debug)]
pub struct PendingReport {
    pub draft: IssueDraft,
    pub submitted_at: Instant,
}

/// Main application structure
pub struct App {
    pub state: AppState,
    pub view: View,
    pub logged_in: bool,
    pub focused: FocusedArea,
    pub config: WardConfig,
    pub store: IssueStore,
    pub location: LocationFix,
    pub filter: IssueFilter,
    pub filtered: Vec<Issue>,
    pub map: MapPanel,
    pub sidebar_field: SidebarField,
    pub search_input: String,
    pub category_index: usize,
    pub status_index: usize,
    pub radius_miles: f64,
    pub list_selected: usize,
    pub selected_id: Option<String>,
    pub detail: Option<DetailCard>,
    pub report_form: Option<Form>,
    pub pending_report: Option<PendingReport>,
    pub status_line: String,
}

/// Sidebar category options: "all" sentinel plus the fixed set
pub fn category_options() -> Vec<String> {
    let mut options = vec!["All Categories".to_string()];
    options.extend(Category::ALL.iter().map(|c| c.to_string()));
    options
}

/// Sidebar status options: "all" sentinel plus the fixed set
pub fn status_options() -> Vec<String> {
    let mut options = vec!["All Statuses".to_string()];
    options.extend(IssueStatus::ALL.iter().map(|s| s.label().to_string()));
    options
}

impl App {
    /// Create a new app instance over a store and a resolved location
    pub fn new(store: IssueStore, config: WardConfig, location: LocationFix) -> Self {
        // Without a usable fix the map falls back to the configured center
        let center = match location.source {
            LocationSource::Fallback => config.map.center(),
            _ => location.coords,
        };
        let map = MapPanel::new(center, config.map.span);

        let status_line = format!("Location: {} ({})", location.coords, location.source.label());

        let mut app = Self {
            state: AppState { should_quit: false },
            view: View::Landing,
            logged_in: false,
            focused: FocusedArea::List,
            config,
            store,
            location,
            filter: IssueFilter::default(),
            filtered: Vec::new(),
            map,
            sidebar_field: SidebarField::Search,
            search_input: String::new(),
            category_index: 0,
            status_index: 0,
            radius_miles: DEFAULT_RADIUS_MILES,
            list_selected: 0,
            selected_id: None,
            detail: None,
            report_form: None,
            pending_report: None,
            status_line,
        };
        app.refresh();
        app
    }

    /// Filter origin for radius checks
    pub fn origin(&self) -> Coordinates {
        self.location.coords
    }

    /// Rebuild the filter from the sidebar controls and recompute the
    /// visible issue list
    pub fn refresh(&mut self) {
        self.filter = IssueFilter {
            category: (self.category_index > 0).then(|| Category::ALL[self.category_index - 1]),
            status: (self.status_index > 0).then(|| IssueStatus::ALL[self.status_index - 1]),
            search: (!self.search_input.is_empty()).then(|| self.search_input.clone()),
            radius_miles: Some(self.radius_miles),
        };
        self.filtered = filter::apply(self.store.issues(), &self.filter, self.origin());

        if self.list_selected >= self.filtered.len() {
            self.list_selected = self.filtered.len().saturating_sub(1);
        }
    }

    // ===== Landing =====

    /// Enter the browse view without logging in
    pub fn continue_as_guest(&mut self) {
        info!("Entering as guest");
        self.view = View::Browsing;
        self.status_line = "Browsing as guest".to_string();
    }

    /// Mock login: flips the flag, no credentials
    pub fn log_in(&mut self) {
        info!("Logged in");
        self.logged_in = true;
        self.status_line = "Logged in. Press Enter to get started".to_string();
    }

    /// Enter the browse view, available once logged in
    pub fn get_started(&mut self) {
        if self.logged_in {
            self.view = View::Browsing;
            self.status_line = "Welcome back".to_string();
        }
    }

    // ===== Focus =====

    /// Move to next panel
    pub fn next_focus(&mut self) {
        self.focused = match self.focused {
            FocusedArea::Sidebar => FocusedArea::Map,
            FocusedArea::Map => FocusedArea::List,
            FocusedArea::List => FocusedArea::Sidebar,
        };
    }

    /// Move to previous panel
    pub fn prev_focus(&mut self) {
        self.focused = match self.focused {
            FocusedArea::Sidebar => FocusedArea::List,
            FocusedArea::Map => FocusedArea::Sidebar,
            FocusedArea::List => FocusedArea::Map,
        };
    }

    // ===== Sidebar =====

    pub fn sidebar_next_field(&mut self) {
        self.sidebar_field = self.sidebar_field.next();
    }

    pub fn sidebar_prev_field(&mut self) {
        self.sidebar_field = self.sidebar_field.prev();
    }

    /// Cycle the active sidebar control backward
    pub fn sidebar_left(&mut self) {
        match self.sidebar_field {
            SidebarField::Category => {
                let len = category_options().len();
                self.category_index = (self.category_index + len - 1) % len;
            }
            SidebarField::Status => {
                let len = status_options().len();
                self.status_index = (self.status_index + len - 1) % len;
            }
            SidebarField::Radius => {
                self.radius_miles = (self.radius_miles - 1.0).max(MIN_RADIUS_MILES);
            }
            _ => return,
        }
        self.refresh();
    }

    /// Cycle the active sidebar control forward
    pub fn sidebar_right(&mut self) {
        match self.sidebar_field {
            SidebarField::Category => {
                self.category_index = (self.category_index + 1) % category_options().len();
            }
            SidebarField::Status => {
                self.status_index = (self.status_index + 1) % status_options().len();
            }
            SidebarField::Radius => {
                self.radius_miles = (self.radius_miles + 1.0).min(MAX_RADIUS_MILES);
            }
            _ => return,
        }
        self.refresh();
    }

    /// Enter on the active sidebar control
    pub fn sidebar_activate(&mut self) {
        if self.sidebar_field == SidebarField::Clear {
            self.clear_filters();
        }
    }

    /// Append to the search input
    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
        self.refresh();
    }

    /// Delete from the search input
    pub fn search_pop(&mut self) {
        self.search_input.pop();
        self.refresh();
    }

    /// Reset every filter control, radius back to the preset
    pub fn clear_filters(&mut self) {
        debug!("Filters cleared");
        self.search_input.clear();
        self.category_index = 0;
        self.status_index = 0;
        self.radius_miles = DEFAULT_RADIUS_MILES;
        self.refresh();
        self.status_line = "Filters cleared".to_string();
    }

    // ===== Issue list =====

    /// Select next issue in list
    pub fn list_next(&mut self) {
        if self.list_selected + 1 < self.filtered.len() {
            self.list_selected += 1;
        }
    }

    /// Select previous issue in list
    pub fn list_prev(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    /// Open the detail card for the list selection
    pub fn open_selected(&mut self) {
        if let Some(issue) = self.filtered.get(self.list_selected) {
            let id = issue.id.clone();
            self.open_detail(id);
        }
    }

    // ===== Detail card =====

    /// Open the detail card for an issue id
    pub fn open_detail(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(issue_id = %id, "Opening issue detail");
        self.report_form = None;
        self.selected_id = Some(id.clone());
        self.detail = Some(DetailCard::new(id));
    }

    /// Close the detail card, keeping the selection
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Vote for the open issue, or the list selection when no card is open
    pub fn vote_current(&mut self) {
        let id = if let Some(card) = &self.detail {
            card.issue_id.clone()
        } else if let Some(issue) = self.filtered.get(self.list_selected) {
            issue.id.clone()
        } else {
            return;
        };

        if self.store.vote(&id) {
            self.status_line = "Vote recorded".to_string();
            self.refresh();
        }
    }

    /// Post the composer text as a comment on the open issue
    ///
    /// Blank input is ignored; the composer keeps its text on failure.
    pub fn submit_comment(&mut self) {
        let Some(card) = self.detail.as_ref() else {
            return;
        };
        if !card.can_submit() {
            return;
        }

        let id = card.issue_id.clone();
        let text = card.comment_input.clone();
        let author = self.config.report.comment_author.clone();

        if self.store.add_comment(&id, &author, &text) {
            if let Some(card) = self.detail.as_mut() {
                card.comment_input.clear();
                card.comment_cursor = 0;
            }
            self.status_line = "Comment added".to_string();
            self.refresh();
        }
    }

    // ===== Report form =====

    /// Open the report form, closing any detail card
    pub fn open_report(&mut self) {
        self.detail = None;
        let categories: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        self.report_form = Some(
            Form::new("Report an Issue")
                .add_field(FormField::text("Title").required())
                .add_field(FormField::select("Category", categories))
                .add_field(FormField::text("Description").required())
                .add_field(FormField::text("Photo reference"))
                .submit_label("Submit Report")
                .cancel_label("Esc to cancel"),
        );
        self.status_line = "Reporting a new issue".to_string();
    }

    /// Discard the report form, unless a submission is pending
    pub fn cancel_report(&mut self) {
        if self.pending_report.is_some() {
            return;
        }
        self.report_form = None;
        self.status_line = "Report cancelled".to_string();
    }

    /// Validate the form and start the submission delay
    pub fn submit_report(&mut self) {
        if self.pending_report.is_some() {
            return;
        }
        let Some(form) = self.report_form.as_mut() else {
            return;
        };
        if !form.validate() {
            self.status_line = "Please complete the required fields".to_string();
            return;
        }

        let title = form.value_of("Title").unwrap_or_default().trim().to_string();
        let category = Category::from(form.value_of("Category").unwrap_or_default());
        let description = form
            .value_of("Description")
            .unwrap_or_default()
            .trim()
            .to_string();
        let photo = form
            .value_of("Photo reference")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let draft = IssueDraft {
            title,
            description,
            category,
            location: self.location.coords,
            author: self.config.report.author.clone(),
            photo,
        };

        info!(title = %draft.title, "Report submitted");
        self.pending_report = Some(PendingReport {
            draft,
            submitted_at: Instant::now(),
        });
        self.status_line = "Submitting report...".to_string();
    }

    /// Complete a pending submission once its delay has elapsed
    ///
    /// Called from the event loop on every poll timeout.
    pub fn tick(&mut self) {
        let delay = Duration::from_millis(self.config.report.submit_delay_ms);
        let done = self
            .pending_report
            .as_ref()
            .is_some_and(|p| p.submitted_at.elapsed() >= delay);
        if !done {
            return;
        }

        let Some(pending) = self.pending_report.take() else {
            return;
        };
        let issue = self.store.create_issue(pending.draft);

        self.report_form = None;
        self.status_line = format!("Issue reported: {}", issue.title);
        self.selected_id = Some(issue.id.clone());
        self.focused = FocusedArea::List;
        self.refresh();

        // Highlight the new issue when it is visible under the current filter
        if let Some(pos) = self
            .filtered
            .iter()
            .position(|i| Some(&i.id) == self.selected_id.as_ref())
        {
            self.list_selected = pos;
        }
    }

    // ===== Map =====

    /// Resolve a mouse click on the map to an issue and open it
    pub fn click_map(&mut self, column: u16, row: u16) {
        let hit = self.map.hit_test(column, row, &self.filtered);
        if let Some(id) = hit {
            self.open_detail(id);
        }
    }
}

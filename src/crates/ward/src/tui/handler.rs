//! Event handling for TUI

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::tui::app::{App, FocusedArea, SidebarField, View};
use crate::tui::detail::DetailFocus;
use crate::tui::forms::FieldType;
use crate::tui::map::PAN_STEP;

/// Routes terminal events to application actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle keyboard input
    pub fn handle_key_event(&self, app: &mut App, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.state.should_quit = true;
            return;
        }

        // Input is frozen while a submission is in flight
        if app.pending_report.is_some() {
            return;
        }

        match app.view {
            View::Landing => self.handle_landing_key(app, key),
            View::Browsing => self.handle_browsing_key(app, key),
        }
    }

    fn handle_landing_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char('g') => app.continue_as_guest(),
            KeyCode::Char('l') => app.log_in(),
            KeyCode::Enter => app.get_started(),
            KeyCode::Char('q') | KeyCode::Esc => app.state.should_quit = true,
            _ => {}
        }
    }

    fn handle_browsing_key(&self, app: &mut App, key: KeyEvent) {
        // Overlays take every key while open
        if app.report_form.is_some() {
            self.handle_form_key(app, key);
            return;
        }
        if app.detail.is_some() {
            self.handle_detail_key(app, key);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                app.next_focus();
                return;
            }
            KeyCode::BackTab => {
                app.prev_focus();
                return;
            }
            _ => {}
        }

        match app.focused {
            FocusedArea::Sidebar => self.handle_sidebar_key(app, key),
            FocusedArea::Map => self.handle_map_key(app, key),
            FocusedArea::List => self.handle_list_key(app, key),
        }
    }

    fn handle_form_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => app.cancel_report(),
            KeyCode::Enter => app.submit_report(),
            KeyCode::Tab => {
                if let Some(form) = app.report_form.as_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab => {
                if let Some(form) = app.report_form.as_mut() {
                    form.prev_field();
                }
            }
            KeyCode::Up => {
                if let Some(form) = app.report_form.as_mut() {
                    match form.focused_field().map(|f| f.field_type) {
                        Some(FieldType::Select) => {
                            if let Some(field) = form.focused_field_mut() {
                                field.prev_option();
                            }
                        }
                        _ => form.prev_field(),
                    }
                }
            }
            KeyCode::Down => {
                if let Some(form) = app.report_form.as_mut() {
                    match form.focused_field().map(|f| f.field_type) {
                        Some(FieldType::Select) => {
                            if let Some(field) = form.focused_field_mut() {
                                field.next_option();
                            }
                        }
                        _ => form.next_field(),
                    }
                }
            }
            KeyCode::Left => {
                if let Some(field) = app.report_form.as_mut().and_then(|f| f.focused_field_mut()) {
                    match field.field_type {
                        FieldType::Select => field.prev_option(),
                        FieldType::Text => field.cursor_left(),
                    }
                }
            }
            KeyCode::Right => {
                if let Some(field) = app.report_form.as_mut().and_then(|f| f.focused_field_mut()) {
                    match field.field_type {
                        FieldType::Select => field.next_option(),
                        FieldType::Text => field.cursor_right(),
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = app.report_form.as_mut().and_then(|f| f.focused_field_mut()) {
                    field.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = app.report_form.as_mut().and_then(|f| f.focused_field_mut()) {
                    field.add_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&self, app: &mut App, key: KeyEvent) {
        let focus = match app.detail.as_ref() {
            Some(card) => card.focus,
            None => return,
        };

        match focus {
            DetailFocus::Body => match key.code {
                KeyCode::Esc => app.close_detail(),
                KeyCode::Tab | KeyCode::Enter => {
                    if let Some(card) = app.detail.as_mut() {
                        card.toggle_focus();
                    }
                }
                KeyCode::Char('v') => app.vote_current(),
                KeyCode::Char('j') | KeyCode::Down => {
                    if let Some(card) = app.detail.as_mut() {
                        card.scroll_down();
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if let Some(card) = app.detail.as_mut() {
                        card.scroll_up();
                    }
                }
                _ => {}
            },
            DetailFocus::Composer => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    if let Some(card) = app.detail.as_mut() {
                        card.toggle_focus();
                    }
                }
                KeyCode::Enter => app.submit_comment(),
                KeyCode::Backspace => {
                    if let Some(card) = app.detail.as_mut() {
                        card.backspace();
                    }
                }
                KeyCode::Left => {
                    if let Some(card) = app.detail.as_mut() {
                        card.cursor_left();
                    }
                }
                KeyCode::Right => {
                    if let Some(card) = app.detail.as_mut() {
                        card.cursor_right();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(card) = app.detail.as_mut() {
                        card.add_char(c);
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_sidebar_key(&self, app: &mut App, key: KeyEvent) {
        // The search row captures printable keys, including 'q'
        if app.sidebar_field == SidebarField::Search {
            match key.code {
                KeyCode::Char(c) => {
                    app.search_push(c);
                    return;
                }
                KeyCode::Backspace => {
                    app.search_pop();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.sidebar_prev_field(),
            KeyCode::Down | KeyCode::Char('j') => app.sidebar_next_field(),
            KeyCode::Left | KeyCode::Char('h') => app.sidebar_left(),
            KeyCode::Right | KeyCode::Char('l') => app.sidebar_right(),
            KeyCode::Enter => app.sidebar_activate(),
            KeyCode::Char('r') => app.open_report(),
            KeyCode::Char('q') => app.state.should_quit = true,
            _ => {}
        }
    }

    fn handle_map_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Left => app.map.pan(-PAN_STEP, 0.0),
            KeyCode::Right => app.map.pan(PAN_STEP, 0.0),
            KeyCode::Up => app.map.pan(0.0, PAN_STEP),
            KeyCode::Down => app.map.pan(0.0, -PAN_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => app.map.zoom_in(),
            KeyCode::Char('-') => app.map.zoom_out(),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Char('r') => app.open_report(),
            KeyCode::Char('q') => app.state.should_quit = true,
            _ => {}
        }
    }

    fn handle_list_key(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.list_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.list_next(),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Char('v') => app.vote_current(),
            KeyCode::Char('r') => app.open_report(),
            KeyCode::Char('q') => app.state.should_quit = true,
            _ => {}
        }
    }

    /// Handle mouse input: left clicks on the map select the nearest marker
    pub fn handle_mouse_event(&self, app: &mut App, mouse: MouseEvent) {
        if app.view != View::Browsing
            || app.report_form.is_some()
            || app.detail.is_some()
            || app.pending_report.is_some()
        {
            return;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            app.click_map(mouse.column, mouse.row);
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

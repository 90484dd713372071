//! UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{category_options, status_options, App, FocusedArea, SidebarField, View};
use crate::tui::detail::render_detail;
use crate::tui::forms::render_form;
use crate::tui::map::{marker, render_legend, render_map};
use ward_core::IssueStatus;

const SLIDER_WIDTH: usize = 20;

/// Render the complete UI
pub fn render_ui(f: &mut Frame, app: &mut App) {
    match app.view {
        View::Landing => render_landing(f, app),
        View::Browsing => render_browsing(f, app),
    }
}

fn centered_rect(screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let x = screen.x + (screen.width - width) / 2;
    let y = screen.y + (screen.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

// ===== Landing =====

fn render_landing(f: &mut Frame, app: &App) {
    let screen = f.area();
    let width = screen.width.saturating_sub(8).clamp(34, 52).min(screen.width);
    let area = centered_rect(screen, width, 11);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let counts = app.store.status_counts();
    let mut stats = Vec::new();
    for (status, count) in [
        (IssueStatus::Reported, counts.reported),
        (IssueStatus::InProgress, counts.in_progress),
        (IssueStatus::Resolved, counts.resolved),
    ] {
        if !stats.is_empty() {
            stats.push(Span::raw("   "));
        }
        let (glyph, color) = marker(status);
        stats.push(Span::styled(
            format!("{} {} {}", glyph, count, status.label().to_lowercase()),
            Style::default().fg(color),
        ));
    }

    let key = Style::default().fg(Color::Yellow);
    let mut lines = vec![
        Line::from(Span::styled(
            "Ward",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Report and track issues in your community"),
        Line::from(""),
        Line::from(stats),
        Line::from(""),
    ];

    if app.logged_in {
        lines.push(Line::from(format!("Welcome, {}!", app.config.report.author)));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw(" get started   "),
            Span::styled("[q]", key),
            Span::raw(" quit"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[g]", key),
            Span::raw(" continue as guest   "),
            Span::styled("[l]", key),
            Span::raw(" log in   "),
            Span::styled("[q]", key),
            Span::raw(" quit"),
        ]));
    }

    let content = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(content, inner);
}

// ===== Browsing =====

fn render_browsing(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title_bar(f, chunks[0]);
    render_main(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    // Overlays; detail and form are mutually exclusive by construction
    if app.report_form.is_some() {
        render_report_overlay(f, app);
    }
    if let Some(card) = &app.detail {
        if let Some(issue) = app.store.get(&card.issue_id) {
            render_detail(f, issue, card);
        }
    }
    if app.pending_report.is_some() {
        render_pending_overlay(f);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            " Ward ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  [Tab] switch panel   [r] report an issue   [q] quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    f.render_widget(bar, area);
}

fn render_main(f: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(30),
            Constraint::Length(36),
        ])
        .split(area);

    render_sidebar(f, app, columns[0]);
    render_map_panel(f, app, columns[1]);
    render_issue_list(f, app, columns[2]);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused == FocusedArea::Sidebar;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(border_style(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let active = |field: SidebarField| focused && app.sidebar_field == field;
    let row = |label: &str, value: String, is_active: bool| {
        let style = if is_active {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        let pointer = if is_active { "▸ " } else { "  " };
        Line::from(Span::styled(format!("{pointer}{label}{value}"), style))
    };

    let search_value = if active(SidebarField::Search) {
        format!("{}│", app.search_input)
    } else if app.search_input.is_empty() {
        "(type to search)".to_string()
    } else {
        app.search_input.clone()
    };

    let categories = category_options();
    let statuses = status_options();
    let select_value = |options: &[String], idx: usize, is_active: bool| {
        let name = options.get(idx).cloned().unwrap_or_default();
        if is_active {
            format!("◀ {name} ▶")
        } else {
            name
        }
    };

    let mut lines = vec![
        row(
            "Search: ",
            search_value,
            active(SidebarField::Search),
        ),
        Line::from(""),
        row(
            "Category: ",
            select_value(&categories, app.category_index, active(SidebarField::Category)),
            active(SidebarField::Category),
        ),
        row(
            "Status: ",
            select_value(&statuses, app.status_index, active(SidebarField::Status)),
            active(SidebarField::Status),
        ),
        row(
            "Radius: ",
            if active(SidebarField::Radius) {
                format!("◀ {:.0} mi ▶", app.radius_miles)
            } else {
                format!("{:.0} mi", app.radius_miles)
            },
            active(SidebarField::Radius),
        ),
    ];

    // Slider bar under the radius row, 1 to 25 miles
    let filled = (((app.radius_miles - 1.0) / 24.0) * SLIDER_WIDTH as f64).round() as usize;
    let filled = filled.min(SLIDER_WIDTH);
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "░".repeat(SLIDER_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(row(
        "",
        "[ Clear filters ]".to_string(),
        active(SidebarField::Clear),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {} of {} issues", app.filtered.len(), app.store.len()),
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_map_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused == FocusedArea::Map;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let title = if focused {
        " Map (arrows pan, +/- zoom) "
    } else {
        " Map "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(focused));
    let inner = block.inner(rows[0]);
    f.render_widget(block, rows[0]);

    // Record the drawing area so mouse clicks can be mapped back
    app.map.area = inner;
    render_map(
        f,
        &app.map,
        &app.filtered,
        app.selected_id.as_deref(),
        app.location.coords,
    );
    render_legend(f, rows[1]);
}

fn render_issue_list(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused == FocusedArea::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Issues ({}) ", app.filtered.len()))
        .border_style(border_style(focused));

    if app.filtered.is_empty() {
        let empty = Paragraph::new("No issues match the current filters")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .filtered
        .iter()
        .enumerate()
        .map(|(idx, issue)| {
            let (glyph, color) = marker(issue.status);
            let selected = idx == app.list_selected;
            if selected {
                let style = Style::default().bg(Color::Blue).fg(Color::White);
                ListItem::new(Line::from(Span::styled(
                    format!(" {} {} ▲{}", glyph, issue.title, issue.votes),
                    style,
                )))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", glyph), Style::default().fg(color)),
                    Span::raw(issue.title.clone()),
                    Span::styled(
                        format!(" ▲{}", issue.votes),
                        Style::default().fg(Color::Magenta),
                    ),
                ]))
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        " {} │ {} ({}) │ {}/{} issues",
        app.status_line,
        app.location.coords,
        app.location.source.label(),
        app.filtered.len(),
        app.store.len()
    );
    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

// ===== Overlays =====

fn render_report_overlay(f: &mut Frame, app: &App) {
    let Some(form) = &app.report_form else {
        return;
    };

    let screen = f.area();
    let width = screen.width.saturating_sub(10).clamp(44, 60).min(screen.width);
    let height = (form.fields.len() as u16 * 3 + 6).min(screen.height);
    let area = centered_rect(screen, width, height);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(inner);

    // Location is taken from the fix, not entered by hand
    let location = Paragraph::new(format!(
        " Location: {} ({})",
        app.location.coords,
        app.location.source.label()
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(location, rows[0]);

    render_form(f, form, rows[1]);
}

fn render_pending_overlay(f: &mut Frame) {
    let screen = f.area();
    let area = centered_rect(screen, 30, 3);

    f.render_widget(Clear, area);
    let message = Paragraph::new("Submitting report...")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(message, area);
}

//! Issue detail card: modal overlay with history, comments, and a composer

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ward_core::Issue;

use super::map::marker;

/// Which part of the card receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    Body,
    Composer,
}

/// State of the open detail card
#[derive(Debug, Clone)]
pub struct DetailCard {
    pub issue_id: String,
    pub focus: DetailFocus,
    pub comment_input: String,
    pub comment_cursor: usize,
    pub scroll: u16,
}

impl DetailCard {
    /// Open a card for the given issue
    pub fn new(issue_id: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            focus: DetailFocus::Body,
            comment_input: String::new(),
            comment_cursor: 0,
            scroll: 0,
        }
    }

    /// Byte offset of the char the cursor sits on
    ///
    /// The cursor counts chars to match the rendered character grid;
    /// `String` editing needs a byte index.
    fn cursor_byte(&self) -> usize {
        self.comment_input
            .char_indices()
            .nth(self.comment_cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.comment_input.len())
    }

    /// Add character to the comment composer
    pub fn add_char(&mut self, c: char) {
        self.comment_input.insert(self.cursor_byte(), c);
        self.comment_cursor += 1;
    }

    /// Backspace in the comment composer
    pub fn backspace(&mut self) {
        if self.comment_cursor > 0 {
            self.comment_cursor -= 1;
            self.comment_input.remove(self.cursor_byte());
        }
    }

    /// Move composer cursor left
    pub fn cursor_left(&mut self) {
        if self.comment_cursor > 0 {
            self.comment_cursor -= 1;
        }
    }

    /// Move composer cursor right
    pub fn cursor_right(&mut self) {
        if self.comment_cursor < self.comment_input.chars().count() {
            self.comment_cursor += 1;
        }
    }

    /// True when the composer holds something worth posting
    pub fn can_submit(&self) -> bool {
        !self.comment_input.trim().is_empty()
    }

    /// Switch between body and composer
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DetailFocus::Body => DetailFocus::Composer,
            DetailFocus::Composer => DetailFocus::Body,
        };
    }

    /// Scroll the body up
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll the body down
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

/// Render the detail card centered on screen
pub fn render_detail(f: &mut Frame, issue: &Issue, card: &DetailCard) {
    let screen = f.area();
    let width = screen.width.saturating_sub(8).clamp(30, 72).min(screen.width);
    let height = screen.height.saturating_sub(4).clamp(12, 26).min(screen.height);

    let card_area = Rect {
        x: (screen.width.saturating_sub(width)) / 2,
        y: (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, card_area);

    let (glyph, color) = marker(issue.status);
    let block = Block::default()
        .title(format!("{} {}", glyph, issue.status.label()))
        .borders(Borders::ALL)
        .style(Style::default().fg(color).bold());
    f.render_widget(block, card_area);

    let inner = Rect {
        x: card_area.x + 1,
        y: card_area.y + 1,
        width: card_area.width.saturating_sub(2),
        height: card_area.height.saturating_sub(2),
    };

    // Body above, composer box and hint line below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_body(f, issue, card, chunks[0]);
    render_composer(f, card, chunks[1]);
    render_hint(f, card, chunks[2]);
}

fn render_body(f: &mut Frame, issue: &Issue, card: &DetailCard, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        issue.title.clone(),
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "Reported by {} on {}",
            issue.author,
            issue.created_at.format("%b %e, %Y %H:%M")
        ),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(vec![
        Span::styled("Category: ", Style::default().fg(Color::Gray)),
        Span::raw(issue.category.to_string()),
        Span::styled("   Votes: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("▲ {}", issue.votes), Style::default().fg(Color::Magenta)),
    ]));
    if let Some(photo) = &issue.photo {
        lines.push(Line::from(vec![
            Span::styled("Photo: ", Style::default().fg(Color::Gray)),
            Span::raw(photo.clone()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(issue.description.clone()));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled(
        "History",
        Style::default().fg(Color::White).bold(),
    )));
    for entry in &issue.history {
        let (glyph, color) = marker(entry.status);
        let mut spans = vec![
            Span::styled(format!("  {} ", glyph), Style::default().fg(color)),
            Span::raw(format!(
                "{}  {}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.status.label()
            )),
        ];
        if let Some(note) = &entry.note {
            spans.push(Span::styled(
                format!("  {}", note),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Comments ({})", issue.comments.len()),
        Style::default().fg(Color::White).bold(),
    )));
    if issue.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No comments yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for comment in &issue.comments {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", comment.author),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("({})", comment.created_at.format("%b %e %H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::raw(format!("    {}", comment.content)));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((card.scroll, 0));
    f.render_widget(body, area);
}

fn render_composer(f: &mut Frame, card: &DetailCard, area: Rect) {
    let focused = card.focus == DetailFocus::Composer;

    let block = Block::default()
        .title("Add a comment")
        .borders(Borders::ALL)
        .style(if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let mut display_text = String::new();
    for (i, c) in card.comment_input.chars().enumerate() {
        if focused && i == card.comment_cursor {
            display_text.push('│');
        }
        display_text.push(c);
    }
    if focused && card.comment_cursor == card.comment_input.chars().count() {
        display_text.push('│');
    }

    let input = Paragraph::new(display_text)
        .block(block)
        .style(Style::default().fg(Color::White));
    f.render_widget(input, area);
}

fn render_hint(f: &mut Frame, card: &DetailCard, area: Rect) {
    let hint = match card.focus {
        DetailFocus::Body => Line::from(Span::styled(
            "[v] vote   [Tab] comment   [j/k] scroll   [Esc] close",
            Style::default().fg(Color::DarkGray),
        )),
        DetailFocus::Composer => {
            let post_style = if card.can_submit() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("[Enter] post", post_style),
                Span::styled("   [Tab] back   [Esc] back", Style::default().fg(Color::DarkGray)),
            ])
        }
    };

    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composer_editing() {
        let mut card = DetailCard::new("1");
        card.add_char('H');
        card.add_char('i');
        assert_eq!(card.comment_input, "Hi");
        assert_eq!(card.comment_cursor, 2);

        card.cursor_left();
        card.add_char('e');
        assert_eq!(card.comment_input, "Hei");

        card.backspace();
        assert_eq!(card.comment_input, "Hi");
        assert_eq!(card.comment_cursor, 1);
    }

    #[test]
    fn test_composer_multibyte_input() {
        let mut card = DetailCard::new("1");
        card.add_char('ü');
        card.add_char('a');
        assert_eq!(card.comment_input, "üa");
        assert_eq!(card.comment_cursor, 2);

        card.cursor_left();
        card.cursor_left();
        card.add_char('✓');
        assert_eq!(card.comment_input, "✓üa");

        card.cursor_right();
        card.backspace();
        assert_eq!(card.comment_input, "✓a");
        assert_eq!(card.comment_cursor, 1);
    }

    #[test]
    fn test_blank_comment_cannot_submit() {
        let mut card = DetailCard::new("1");
        assert!(!card.can_submit());

        card.comment_input = "   ".to_string();
        assert!(!card.can_submit());

        card.comment_input = "This fixed itself".to_string();
        assert!(card.can_submit());
    }

    #[test]
    fn test_focus_toggle() {
        let mut card = DetailCard::new("1");
        assert_eq!(card.focus, DetailFocus::Body);

        card.toggle_focus();
        assert_eq!(card.focus, DetailFocus::Composer);

        card.toggle_focus();
        assert_eq!(card.focus, DetailFocus::Body);
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut card = DetailCard::new("1");
        card.scroll_up();
        assert_eq!(card.scroll, 0);

        card.scroll_down();
        card.scroll_down();
        card.scroll_up();
        assert_eq!(card.scroll, 1);
    }
}

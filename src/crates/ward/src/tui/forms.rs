//! Form components for TUI with multi-field support

use ratatui::{
    prelude::*,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Select,
}

/// Form field
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    pub cursor: usize,
    pub options: Vec<String>, // For select fields
    pub selected_option: usize,
    pub error: Option<String>,
    pub required: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_type: FieldType::Text,
            value: String::new(),
            cursor: 0,
            options: Vec::new(),
            selected_option: 0,
            error: None,
            required: false,
        }
    }

    /// Create a new select field, starting on the first option
    pub fn select(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            field_type: FieldType::Select,
            value: options.first().cloned().unwrap_or_default(),
            cursor: 0,
            options,
            selected_option: 0,
            error: None,
            required: false,
        }
    }

    /// Mark field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Byte offset of the char the cursor sits on
    ///
    /// The cursor counts chars so it can be compared against the rendered
    /// character grid; `String` editing needs a byte index.
    fn cursor_byte(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Add character to field (text fields only)
    pub fn add_char(&mut self, c: char) {
        if self.field_type == FieldType::Text {
            self.value.insert(self.cursor_byte(), c);
            self.cursor += 1;
            self.error = None;
        }
    }

    /// Backspace in field
    pub fn backspace(&mut self) {
        if self.field_type == FieldType::Text && self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor_byte());
            self.error = None;
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move to next option (for select fields)
    pub fn next_option(&mut self) {
        if !self.options.is_empty() {
            self.selected_option = (self.selected_option + 1) % self.options.len();
            self.value = self.options[self.selected_option].clone();
            self.error = None;
        }
    }

    /// Move to previous option (for select fields)
    pub fn prev_option(&mut self) {
        if !self.options.is_empty() {
            self.selected_option = if self.selected_option > 0 {
                self.selected_option - 1
            } else {
                self.options.len() - 1
            };
            self.value = self.options[self.selected_option].clone();
            self.error = None;
        }
    }

    /// Validate field value
    pub fn validate(&mut self) -> bool {
        if self.required && self.value.trim().is_empty() {
            self.error = Some(format!("{} is required", self.label));
            return false;
        }

        self.error = None;
        true
    }

    /// Get field value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Multi-field form
#[derive(Debug, Clone)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused_field: usize,
    pub submit_label: String,
    pub cancel_label: String,
}

impl Form {
    /// Create a new form
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            focused_field: 0,
            submit_label: "Submit".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }

    /// Add field to form
    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Set submit button label
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Set cancel button label
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Get focused field
    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused_field)
    }

    /// Get mutable focused field
    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused_field)
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = (self.focused_field + 1) % self.fields.len();
        }
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = if self.focused_field > 0 {
                self.focused_field - 1
            } else {
                self.fields.len() - 1
            };
        }
    }

    /// Validate all fields
    pub fn validate(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            if !field.validate() {
                all_valid = false;
            }
        }
        all_valid
    }

    /// True when every required field has a non-blank value
    ///
    /// Unlike `validate`, this does not record errors; it drives the
    /// enabled state of the submit action.
    pub fn is_complete(&self) -> bool {
        self.fields
            .iter()
            .all(|f| !f.required || !f.value.trim().is_empty())
    }

    /// Value of the field with the given label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Render a form into the given area
pub fn render_form(f: &mut Frame, form: &Form, area: Rect) {
    // One three-row box per field plus a button row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(3))
                .take(form.fields.len())
                .chain(std::iter::once(Constraint::Min(2)))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (idx, field) in form.fields.iter().enumerate() {
        if let Some(area) = chunks.get(idx) {
            render_form_field(f, field, *area, idx == form.focused_field);
        }
    }

    if let Some(button_area) = chunks.last() {
        render_form_buttons(f, form, *button_area);
    }
}

/// Render single form field
fn render_form_field(f: &mut Frame, field: &FormField, area: Rect, focused: bool) {
    let block_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let title = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(block_style);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    let display_text = match field.field_type {
        FieldType::Select => {
            format!("{} (press ↑↓ to change)", field.value)
        }
        FieldType::Text => {
            let mut text = String::new();
            for (i, c) in field.value.chars().enumerate() {
                if focused && i == field.cursor {
                    text.push('│');
                }
                text.push(c);
            }
            if focused && field.cursor == field.value.chars().count() {
                text.push('│');
            }
            text
        }
    };

    let content_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = Paragraph::new(display_text).style(content_style);

    f.render_widget(block, area);
    f.render_widget(content, inner);

    if let Some(error) = &field.error {
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let error_text = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        f.render_widget(error_text, error_area);
    }
}

/// Render form buttons, dimming submit until the form is complete
fn render_form_buttons(f: &mut Frame, form: &Form, area: Rect) {
    let submit_style = if form.is_complete() {
        Style::default().bg(Color::Green).fg(Color::Black).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled(format!(" [{}] ", form.submit_label), submit_style),
        Span::raw("   "),
        Span::styled(
            format!(" [{}] ", form.cancel_label),
            Style::default().fg(Color::White),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_text() {
        let mut field = FormField::text("Title");
        field.add_char('J');
        field.add_char('o');
        assert_eq!(field.value(), "Jo");
        assert_eq!(field.cursor, 2);

        field.backspace();
        assert_eq!(field.value(), "J");
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn test_form_field_multibyte_input() {
        let mut field = FormField::text("Title");
        field.add_char('é');
        field.add_char('x');
        assert_eq!(field.value(), "éx");
        assert_eq!(field.cursor, 2);

        field.backspace();
        assert_eq!(field.value(), "é");
        field.backspace();
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_form_field_cursor_moves_by_chars() {
        let mut field = FormField::text("Title");
        for c in "✓ü".chars() {
            field.add_char(c);
        }

        field.cursor_left();
        field.add_char('a');
        assert_eq!(field.value(), "✓aü");
        assert_eq!(field.cursor, 2);

        field.cursor_right();
        assert_eq!(field.cursor, 3);
        // Already at the end
        field.cursor_right();
        assert_eq!(field.cursor, 3);
    }

    #[test]
    fn test_form_field_select_cycles() {
        let mut field = FormField::select(
            "Category",
            vec!["Road Maintenance".to_string(), "Lighting".to_string()],
        );
        assert_eq!(field.value(), "Road Maintenance");

        field.next_option();
        assert_eq!(field.value(), "Lighting");

        field.next_option();
        assert_eq!(field.value(), "Road Maintenance");

        field.prev_option();
        assert_eq!(field.value(), "Lighting");

        // Typing does nothing on a select field
        field.add_char('x');
        assert_eq!(field.value(), "Lighting");
    }

    #[test]
    fn test_form_field_validation() {
        let mut field = FormField::text("Title").required();
        assert!(!field.validate()); // Empty required field
        assert!(field.error.is_some());

        field.value = "   ".to_string();
        assert!(!field.validate()); // Whitespace only is still empty

        field.value = "Broken swing".to_string();
        assert!(field.validate());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_form_completeness() {
        let mut form = Form::new("Report an Issue")
            .add_field(FormField::text("Title").required())
            .add_field(FormField::select(
                "Category",
                vec!["Road Maintenance".to_string()],
            ))
            .add_field(FormField::text("Description").required())
            .add_field(FormField::text("Photo reference"));

        assert_eq!(form.fields.len(), 4);
        assert!(!form.is_complete());

        form.fields[0].value = "Pothole".to_string();
        assert!(!form.is_complete()); // Description still blank

        form.fields[2].value = "Deep pothole near the crosswalk".to_string();
        assert!(form.is_complete()); // Optional photo may stay empty
    }

    #[test]
    fn test_form_value_of() {
        let mut form = Form::new("Report an Issue")
            .add_field(FormField::text("Title").required())
            .add_field(FormField::text("Description").required());

        form.fields[0].value = "Pothole".to_string();

        assert_eq!(form.value_of("Title"), Some("Pothole"));
        assert_eq!(form.value_of("Description"), Some(""));
        assert_eq!(form.value_of("Missing"), None);
    }

    #[test]
    fn test_form_field_navigation_wraps() {
        let mut form = Form::new("Report an Issue")
            .add_field(FormField::text("Title"))
            .add_field(FormField::text("Description"));

        assert_eq!(form.focused_field, 0);
        form.next_field();
        assert_eq!(form.focused_field, 1);
        form.next_field();
        assert_eq!(form.focused_field, 0);
        form.prev_field();
        assert_eq!(form.focused_field, 1);
    }
}

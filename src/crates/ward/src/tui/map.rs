//! Map panel: projects issue coordinates onto the terminal character grid
//!
//! Rendering and mouse hit-testing share one projection, so a click on a
//! drawn marker always resolves to the issue that produced it.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use std::collections::HashMap;
use ward_core::{Coordinates, Issue, IssueStatus};

/// Terminal cells are roughly twice as tall as wide
const CELL_ASPECT: f64 = 2.0;

/// Zoom limits, in degrees of longitude across the viewport
const MIN_SPAN: f64 = 0.005;
const MAX_SPAN: f64 = 2.0;

/// Zoom step factor
const ZOOM_STEP: f64 = 0.7;

/// Latitude limit for the viewport center
const MAX_LAT: f64 = 85.0;

/// Fraction of the visible span an arrow key pans by
pub const PAN_STEP: f64 = 0.1;

/// Marker glyph and color for a status
pub fn marker(status: IssueStatus) -> (char, Color) {
    match status {
        IssueStatus::Reported => ('!', Color::Yellow),
        IssueStatus::InProgress => ('~', Color::Blue),
        IssueStatus::Resolved => ('✓', Color::Green),
    }
}

/// Map viewport state
#[derive(Debug, Clone)]
pub struct MapPanel {
    /// Viewport center
    pub center: Coordinates,
    /// Viewport width in degrees of longitude
    pub span: f64,
    /// Inner drawing area of the last render, used for projection
    pub area: Rect,
}

impl MapPanel {
    /// Create a panel centered on the given coordinates
    pub fn new(center: Coordinates, span: f64) -> Self {
        Self {
            center,
            span: span.clamp(MIN_SPAN, MAX_SPAN),
            area: Rect::default(),
        }
    }

    /// Latitude covered by the viewport, corrected for cell aspect
    fn lat_span(&self) -> f64 {
        if self.area.width == 0 {
            return self.span;
        }
        self.span * f64::from(self.area.height) * CELL_ASPECT / f64::from(self.area.width)
    }

    /// Project coordinates to a terminal cell inside the drawing area
    ///
    /// Returns `None` when the point is outside the viewport or the panel
    /// has not been drawn yet.
    pub fn project(&self, coords: Coordinates) -> Option<(u16, u16)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }

        let lat_span = self.lat_span();
        let west = self.center.lng - self.span / 2.0;
        let north = self.center.lat + lat_span / 2.0;

        // Round to the nearest cell so points on cell boundaries do not
        // flip under floating point error
        let x = ((coords.lng - west) / self.span * f64::from(self.area.width)).round();
        let y = ((north - coords.lat) / lat_span * f64::from(self.area.height)).round();

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x as u16, y as u16);
        if col >= self.area.width || row >= self.area.height {
            return None;
        }

        Some((self.area.x + col, self.area.y + row))
    }

    /// Resolve a terminal click to the nearest marker within one cell
    pub fn hit_test(&self, column: u16, row: u16, issues: &[Issue]) -> Option<String> {
        let mut best: Option<(u32, &Issue)> = None;

        for issue in issues {
            if let Some((col, cell_row)) = self.project(issue.location) {
                let dist = u32::from(col.abs_diff(column)) + u32::from(cell_row.abs_diff(row));
                if dist <= 1 {
                    let closer = match best {
                        Some((best_dist, _)) => dist < best_dist,
                        None => true,
                    };
                    if closer {
                        best = Some((dist, issue));
                    }
                }
            }
        }

        best.map(|(_, issue)| issue.id.clone())
    }

    /// Pan the viewport by fractions of the visible span
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.lng += dx * self.span;
        self.center.lat = (self.center.lat + dy * self.lat_span()).clamp(-MAX_LAT, MAX_LAT);
    }

    /// Narrow the viewport
    pub fn zoom_in(&mut self) {
        self.span = (self.span * ZOOM_STEP).max(MIN_SPAN);
    }

    /// Widen the viewport
    pub fn zoom_out(&mut self) {
        self.span = (self.span / ZOOM_STEP).min(MAX_SPAN);
    }
}

/// Render markers for the given issues into the panel's area
///
/// The whole surface is repainted: every visible issue gets a fresh marker
/// and stale cells from the previous frame are cleared by the repaint.
pub fn render_map(
    f: &mut Frame,
    panel: &MapPanel,
    issues: &[Issue],
    selected: Option<&str>,
    you: Coordinates,
) {
    let area = panel.area;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut cells: HashMap<(u16, u16), (char, Style)> = HashMap::new();

    // Current location marker sits under issue markers
    if let Some(cell) = panel.project(you) {
        cells.insert(cell, ('◉', Style::default().fg(Color::Cyan)));
    }

    // Later issues overwrite earlier ones on collision; issues come in
    // newest-first order, so draw oldest first to keep the newest on top
    for issue in issues.iter().rev() {
        if let Some(cell) = panel.project(issue.location) {
            let (glyph, color) = marker(issue.status);
            let style = if selected == Some(issue.id.as_str()) {
                Style::default().fg(Color::Black).bg(color).bold()
            } else {
                Style::default().fg(color).bold()
            };
            cells.insert(cell, (glyph, style));
        }
    }

    let faint = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);

    for row in 0..area.height {
        let mut spans: Vec<Span> = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let cell = (area.x + col, area.y + row);
            match cells.get(&cell) {
                Some((glyph, style)) => spans.push(Span::styled(glyph.to_string(), *style)),
                None => {
                    // Sparse dot grid as a background texture
                    if row % 2 == 0 && col % 4 == 2 {
                        spans.push(Span::styled("·", faint));
                    } else {
                        spans.push(Span::raw(" "));
                    }
                }
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the status legend line
pub fn render_legend(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (idx, status) in IssueStatus::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let (glyph, color) = marker(*status);
        spans.push(Span::styled(
            format!("{} {}", glyph, status.label()),
            Style::default().fg(color),
        ));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled("◉ you", Style::default().fg(Color::Cyan)));

    let legend = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_core::{Category, Issue, DEFAULT_CENTER};

    fn drawn_panel() -> MapPanel {
        let mut panel = MapPanel::new(DEFAULT_CENTER, 0.08);
        panel.area = Rect::new(0, 0, 40, 20);
        panel
    }

    fn issue_at(id: &str, lat: f64, lng: f64) -> Issue {
        let mut issue = Issue::new(
            "Test issue",
            "Description",
            Category::Other,
            Coordinates::new(lat, lng),
            "Tester",
        );
        issue.id = id.to_string();
        issue
    }

    #[test]
    fn test_marker_encoding() {
        assert_eq!(marker(IssueStatus::Reported), ('!', Color::Yellow));
        assert_eq!(marker(IssueStatus::InProgress), ('~', Color::Blue));
        assert_eq!(marker(IssueStatus::Resolved), ('✓', Color::Green));
    }

    #[test]
    fn test_project_center_lands_in_middle() {
        let panel = drawn_panel();
        let cell = panel.project(DEFAULT_CENTER).unwrap();
        assert_eq!(cell, (20, 10));
    }

    #[test]
    fn test_project_outside_viewport() {
        let panel = drawn_panel();
        let far = Coordinates::new(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng + 1.0);
        assert!(panel.project(far).is_none());
    }

    #[test]
    fn test_project_before_first_draw() {
        let panel = MapPanel::new(DEFAULT_CENTER, 0.08);
        assert!(panel.project(DEFAULT_CENTER).is_none());
    }

    #[test]
    fn test_hit_test_finds_marker() {
        let panel = drawn_panel();
        let issues = vec![issue_at("42", DEFAULT_CENTER.lat, DEFAULT_CENTER.lng)];

        // Exact cell and one-cell tolerance
        assert_eq!(panel.hit_test(20, 10, &issues).as_deref(), Some("42"));
        assert_eq!(panel.hit_test(21, 10, &issues).as_deref(), Some("42"));

        // Two cells away is a miss
        assert!(panel.hit_test(20, 12, &issues).is_none());
        assert!(panel.hit_test(22, 10, &issues).is_none());
    }

    #[test]
    fn test_hit_test_prefers_exact_cell() {
        let panel = drawn_panel();
        // 0.002 degrees of longitude is one cell at this zoom
        let issues = vec![
            issue_at("near", DEFAULT_CENTER.lat, DEFAULT_CENTER.lng + 0.002),
            issue_at("exact", DEFAULT_CENTER.lat, DEFAULT_CENTER.lng),
        ];

        assert_eq!(panel.hit_test(20, 10, &issues).as_deref(), Some("exact"));
    }

    #[test]
    fn test_pan_moves_center() {
        let mut panel = drawn_panel();
        let before = panel.center;

        panel.pan(PAN_STEP, 0.0);
        assert!(panel.center.lng > before.lng);
        assert_eq!(panel.center.lat, before.lat);

        panel.pan(0.0, PAN_STEP);
        assert!(panel.center.lat > before.lat);
    }

    #[test]
    fn test_pan_clamps_latitude() {
        let mut panel = drawn_panel();

        for _ in 0..30_000 {
            panel.pan(0.0, PAN_STEP);
        }
        assert_eq!(panel.center.lat, MAX_LAT);

        for _ in 0..30_000 {
            panel.pan(0.0, -PAN_STEP);
        }
        assert_eq!(panel.center.lat, -MAX_LAT);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut panel = drawn_panel();

        for _ in 0..100 {
            panel.zoom_in();
        }
        assert!(panel.span >= MIN_SPAN);

        for _ in 0..100 {
            panel.zoom_out();
        }
        assert!(panel.span <= MAX_SPAN);
    }
}

//! UI layout helpers shared by the form and card views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Create a centered rect taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Pad a line with leading spaces so its display width is centered in
/// `width` columns. Lines wider than `width` are returned unchanged.
pub fn center_line(line: &str, width: usize) -> String {
    let line_width = line.width();
    if line_width >= width {
        return line.to_string();
    }
    let pad = (width - line_width) / 2;
    format!("{}{}", " ".repeat(pad), line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_creates_smaller_area() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.width <= 55);
        assert!(centered.height <= 55);
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.x >= 20 && centered.x <= 30);
        assert!(centered.y >= 20 && centered.y <= 30);
    }

    #[test]
    fn center_line_pads_narrow_lines() {
        assert_eq!(center_line("ab", 6), "  ab");
        assert_eq!(center_line("abcd", 4), "abcd");
    }

    #[test]
    fn center_line_leaves_wide_lines_alone() {
        assert_eq!(center_line("abcdef", 4), "abcdef");
    }
}

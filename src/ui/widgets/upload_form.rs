// src/ui/widgets/upload_form.rs

use crate::app::{App, UploadState, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the file path input box.
pub fn render_upload_form(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("Document Path (png, jpg, jpeg, pdf, txt)");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Cursor only while the form can be edited.
    if matches!(app.upload_state, UploadState::Idle | UploadState::Failed(_)) {
        frame.set_cursor_position((area.x.saturating_add(cursor_column(&app.input, area)), area.y.saturating_add(1)));
    }
}

/// Column of the cursor relative to `area.x`: just past the input, but never
/// beyond the inner edge of the bordered box.
fn cursor_column(input: &str, area: Rect) -> u16 {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let last_inner = area.width.saturating_sub(2).max(1);
    typed.saturating_add(1).min(last_inner)
}

/// Renders the indeterminate progress indicator: a full bar with a spinner
/// label. Draws nothing outside of `Uploading`.
pub fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    if !app.is_uploading() || area.height == 0 {
        return;
    }
    let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Analyzing"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(100)
        .label(format!("{} Uploading and analyzing...", spinner_char));
    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_short_input() {
        let area = Rect::new(0, 0, 40, 3);
        assert_eq!(cursor_column("", area), 1);
        assert_eq!(cursor_column("a.pdf", area), 6);
        assert_eq!(cursor_column("ñandú.txt", area), 10);
    }

    #[test]
    fn cursor_stays_inside_box_for_long_input() {
        let area = Rect::new(5, 2, 40, 3);
        assert_eq!(cursor_column(&"x".repeat(100), area), 38);
        assert_eq!(cursor_column(&"x".repeat(70_000), area), 38);

        let tiny = Rect::new(0, 0, 1, 3);
        assert_eq!(cursor_column("abc", tiny), 1);
    }
}

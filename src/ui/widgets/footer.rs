// src/ui/widgets/footer.rs

use crate::app::{App, ExportStatus, UploadState, View};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match (app.view, &app.upload_state) {
        (View::Dashboard, _) => Line::from(vec![
            Span::raw("Refreshing automatically. "),
            key("Tab"),
            Span::raw(" upload view, "),
            key("Q"),
            Span::raw(" to quit."),
        ]),
        (View::Upload, UploadState::Idle) | (View::Upload, UploadState::Failed(_)) => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to analyze, "),
            key("Tab"),
            Span::raw(" dashboard, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        (View::Upload, UploadState::Uploading) => Line::from("Analyzing... Press Esc to quit."),
        (View::Upload, UploadState::Finished) => match &app.export_status {
            ExportStatus::Idle => Line::from(vec![
                key("[N]"),
                Span::raw("ew upload, "),
                key("[E]"),
                Span::raw("xport, "),
                key("[Tab]"),
                Span::raw(" dashboard, "),
                key("[Q]"),
                Span::raw("uit"),
            ]),
            ExportStatus::Success(path) => Line::from(vec![
                Span::styled("Exported to ", Style::default().fg(Color::Green)),
                Span::raw(path.as_str()),
            ]),
            ExportStatus::Error(message) => Line::from(vec![
                Span::styled("Export failed: ", Style::default().fg(Color::Red)),
                Span::raw(message.as_str()),
            ]),
        },
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

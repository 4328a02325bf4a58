// src/ui/widgets/stats.rs

use crate::app::App;
use crate::ui::layout::DashboardLayout;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the three counter cards. Before the first snapshot they show `--`.
pub fn render_stats(frame: &mut Frame, app: &App, layout: &DashboardLayout) {
    let snapshot = app.dashboard.snapshot.as_ref();
    let cards = [
        (
            "Documents Scanned",
            snapshot.map(|s| s.documents_scanned.to_string()),
            Color::Cyan,
            layout.documents_scanned,
        ),
        (
            "Sensitive Entities",
            snapshot.map(|s| s.sensitive_entities.to_string()),
            Color::Magenta,
            layout.sensitive_entities,
        ),
        (
            "Compliance Score",
            snapshot.map(|s| s.compliance_label()),
            Color::Green,
            layout.compliance_score,
        ),
    ];

    for (title, value, color, area) in cards {
        let value = value.unwrap_or_else(|| "--".to_string());
        let card = Paragraph::new(Line::from(Span::styled(value, Style::new().bold().fg(color))))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(card, area);
    }
}

/// Renders the one-line poll status under the dashboard.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.dashboard.last_error, &app.dashboard.last_updated) {
        (Some((at, message)), _) => Line::from(vec![
            Span::styled(format!("{} ", at.format("%H:%M:%S")), Style::default().fg(Color::DarkGray)),
            Span::styled("Refresh failed: ", Style::default().fg(Color::Red)),
            Span::raw(message.as_str()),
        ]),
        (None, Some(at)) => Line::from(vec![
            Span::styled(format!("{} ", at.format("%H:%M:%S")), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("Updated ({} refreshes)", app.dashboard.refreshes)),
        ]),
        (None, None) => Line::from("Waiting for first snapshot...".fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

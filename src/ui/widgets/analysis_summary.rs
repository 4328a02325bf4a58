// src/ui/widgets/analysis_summary.rs

use crate::app::{App, UploadState};
use crate::core::catalog;
use crate::core::models::AnalysisResult;
use crate::ui::widgets::risk_style;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the summary of the last analysis: how many sensitive fields were
/// found, the document type, the risk level, and a per-type breakdown.
pub fn render_analysis_summary(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Summary");

    let text = match (&app.upload_state, &app.analysis) {
        (UploadState::Failed(message), _) => Text::from(vec![
            Line::from("UPLOAD FAILED".bold().fg(Color::Red)),
            Line::from(""),
            Line::from(message.as_str()),
        ]),
        (UploadState::Finished, Some(result)) => summary_text(result),
        _ => Text::from(Line::from("Results will appear here...".fg(Color::DarkGray))),
    };

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// The summary lines for one result.
pub fn summary_text(result: &AnalysisResult) -> Text<'_> {
    let risk = result.risk();
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Sensitive fields: "),
            Span::styled(result.findings_count().to_string(), Style::new().bold()),
        ]),
        Line::from(vec![
            Span::raw("Document type:    "),
            Span::styled(result.document_type.as_str(), Style::new().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Risk level:       "),
            Span::styled(result.risk_level.as_str(), risk_style(&risk)),
        ]),
        Line::from(""),
        Line::from("BY TYPE".bold()),
    ];

    let counts = result.counts_by_type();
    if counts.is_empty() {
        lines.push(Line::from(Span::styled("✓ Nothing sensitive detected.", Style::default().fg(Color::Green))));
    }
    for (kind, count) in counts {
        lines.push(Line::from(vec![
            Span::raw("- "),
            Span::raw(catalog::title_for(kind)),
            Span::raw(": "),
            Span::styled(count.to_string(), Style::default().fg(Color::Magenta)),
        ]));
    }
    Text::from(lines)
}

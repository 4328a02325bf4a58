// src/ui/widgets/findings.rs

use crate::app::{App, SPINNER_CHARS, UploadState};
use crate::core::catalog::{self, Sensitivity};
use crate::core::models::Finding;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn render_findings(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Findings (Navigate with ↑ ↓)");

    let findings = match (&app.upload_state, &app.analysis) {
        (UploadState::Finished, Some(result)) => &result.findings,
        (UploadState::Uploading, _) => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
            let waiting = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw("Waiting for the analysis service..."),
            ]))
            .alignment(Alignment::Center)
            .block(main_block);
            frame.render_widget(waiting, area);
            return;
        }
        _ => {
            let hint = Paragraph::new("Type a document path and press Enter to analyze it.")
                .alignment(Alignment::Center)
                .block(main_block);
            frame.render_widget(hint, area);
            return;
        }
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Min(0)])
        .split(inner_area);

    let items: Vec<ListItem> = findings.iter().map(finding_item).collect();
    let list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, chunks[0], &mut app.findings_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let selected = app.findings_state.selected().and_then(|i| findings.get(i));
    let detail_text = match selected.and_then(|f| catalog::lookup(&f.kind)) {
        Some(kind) => Text::from(vec![
            Line::from(kind.title.yellow().bold()),
            Line::from(kind.sensitivity.to_string()),
            Line::from(""),
            Line::from("HANDLING:".yellow().bold()),
            Line::from(kind.handling),
        ]),
        None if findings.is_empty() => Text::from(vec![
            Line::from(""),
            Line::from("✓ NO SENSITIVE DATA FOUND".bold().fg(Color::Green)),
        ]),
        None => Text::from("No handling notes for this type."),
    };
    let details = Paragraph::new(detail_text).wrap(Wrap { trim: true }).block(detail_block);
    frame.render_widget(details, chunks[1]);
}

/// One list line: `<type>: <value>`, with the type tinted by sensitivity.
pub fn finding_item(finding: &Finding) -> ListItem<'_> {
    let type_style = match catalog::lookup(&finding.kind).map(|k| k.sensitivity) {
        Some(Sensitivity::HighValue) => Style::default().fg(Color::Red).bold(),
        Some(Sensitivity::Contact) => Style::default().fg(Color::Yellow).bold(),
        _ => Style::default().bold(),
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{}:", finding.kind), type_style),
        Span::raw(" "),
        Span::raw(finding.value.as_str()),
    ]))
}

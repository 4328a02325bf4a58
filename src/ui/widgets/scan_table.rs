// src/ui/widgets/scan_table.rs

use crate::app::App;
use crate::core::models::{RecentScan, RiskLevel};
use crate::ui::widgets::risk_style;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

const HEADERS: [&str; 4] = ["File", "Risk", "Entities", "Timestamp"];

/// Renders the recent scans table, rebuilt from scratch on every frame.
pub fn render_scan_table(frame: &mut Frame, app: &App, area: Rect) {
    let scans = app
        .dashboard
        .snapshot
        .as_ref()
        .map(|s| s.recent_scans.as_slice())
        .unwrap_or_default();

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::new().bold().fg(Color::Yellow))
        .bottom_margin(1);

    let table = Table::new(
        scan_rows(scans),
        [
            Constraint::Percentage(40),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Min(19),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Recent Scans"));
    frame.render_widget(table, area);
}

/// One row per scan, in the order the service sent them.
pub fn scan_rows(scans: &[RecentScan]) -> Vec<Row<'_>> {
    scans
        .iter()
        .map(|scan| {
            Row::new(vec![
                Cell::from(scan.file.as_str()),
                Cell::from(scan.risk.as_str()).style(risk_style(&RiskLevel::parse(&scan.risk))),
                Cell::from(scan.entities_label()),
                Cell::from(scan.timestamp.as_str()),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(file: &str, risk: &str) -> RecentScan {
        RecentScan {
            file: file.to_string(),
            risk: risk.to_string(),
            entities: 2.into(),
            timestamp: "2026-10-18 09:15:00".to_string(),
        }
    }

    #[test]
    fn one_row_per_recent_scan() {
        let scans = vec![scan("a.pdf", "High"), scan("b.txt", "Low"), scan("c.png", "Medium")];
        assert_eq!(scan_rows(&scans).len(), 3);
        assert!(scan_rows(&[]).is_empty());
    }
}

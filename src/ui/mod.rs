// src/ui/mod.rs

use crate::app::{App, View};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::header::render_header(frame, app, layout.header);

    match app.view {
        View::Upload => {
            let upload = layout::upload_layout(layout.body, app.is_uploading());
            widgets::upload_form::render_upload_form(frame, app, upload.upload_form);
            widgets::upload_form::render_progress(frame, app, upload.progress);
            widgets::analysis_summary::render_analysis_summary(frame, app, upload.summary);
            widgets::findings::render_findings(frame, app, upload.results);
        }
        View::Dashboard => {
            let dashboard = layout::dashboard_layout(layout.body);
            widgets::stats::render_stats(frame, app, &dashboard);
            widgets::risk_chart::render_risk_chart(frame, app, dashboard.risk_chart);
            widgets::scan_table::render_scan_table(frame, app, dashboard.scan_table);
            widgets::stats::render_status(frame, app, dashboard.status);
        }
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AnalysisResult, DashboardSnapshot, Finding, RecentScan, RiskDistribution};
    use crate::events::AppEvent;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            findings: vec![
                Finding { kind: "national_id".to_string(), value: "12345678".to_string() },
                Finding { kind: "email".to_string(), value: "jane@example.com".to_string() },
                Finding { kind: "email".to_string(), value: "john@example.com".to_string() },
            ],
            document_type: "Employment Contract".to_string(),
            risk_level: "HIGH".to_string(),
        }
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            documents_scanned: 42,
            sensitive_entities: 317,
            compliance_score: 88.0,
            risk_distribution: RiskDistribution { high: 5, medium: 12, low: 25 },
            recent_scans: vec![
                RecentScan {
                    file: "payroll.pdf".to_string(),
                    risk: "High".to_string(),
                    entities: 40.into(),
                    timestamp: "2026-10-18 09:00".to_string(),
                },
                RecentScan {
                    file: "memo.txt".to_string(),
                    risk: "Low".to_string(),
                    entities: "1".into(),
                    timestamp: "2026-10-18 08:42".to_string(),
                },
            ],
        }
    }

    #[test]
    fn upload_view_renders_findings() {
        let mut app = App::new(Vec::new());
        app.apply_event(AppEvent::AnalysisFinished(Ok(analysis())));
        let screen = draw(&mut app);

        assert!(screen.contains("Sensitive fields: 3"));
        assert!(screen.contains("Employment Contract"));
        assert!(screen.contains("HIGH"));
        assert!(screen.contains("national_id: 12345678"));
        assert!(screen.contains("email: john@example.com"));
        assert!(screen.contains("Email Address: 2"));
    }

    #[test]
    fn progress_only_while_uploading() {
        let mut app = App::new(Vec::new());
        app.input = "contract.pdf".to_string();
        assert!(!draw(&mut app).contains("Uploading and analyzing"));

        app.begin_upload();
        assert!(draw(&mut app).contains("Uploading and analyzing"));

        app.apply_event(AppEvent::AnalysisFinished(Ok(analysis())));
        assert!(!draw(&mut app).contains("Uploading and analyzing"));
    }

    #[test]
    fn dashboard_view_renders_snapshot() {
        let mut app = App::new(Vec::new());
        app.next_view();
        assert!(draw(&mut app).contains("Waiting for first snapshot"));

        app.apply_event(AppEvent::DashboardRefreshed(Ok(snapshot())));
        let screen = draw(&mut app);

        assert!(screen.contains("42"));
        assert!(screen.contains("317"));
        assert!(screen.contains("88%"));
        assert!(screen.contains("payroll.pdf"));
        assert!(screen.contains("memo.txt"));
        assert!(screen.contains("Medium"));
    }
}

// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Frame-level areas shared by both views.
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Areas of the Upload view.
///
/// Field names follow the element ids of the web page the console replaces:
/// `upload_form`, `progress`, the results summary, and the results list.
pub struct UploadLayout {
    pub upload_form: Rect,
    pub progress: Rect,
    pub summary: Rect,
    pub results: Rect,
}

/// Areas of the Dashboard view.
pub struct DashboardLayout {
    pub documents_scanned: Rect,
    pub sensitive_entities: Rect,
    pub compliance_score: Rect,
    pub risk_chart: Rect,
    pub scan_table: Rect,
    pub status: Rect,
}

/// Splits the terminal into a tab header, the active view, and a one-line footer.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// The progress row only takes space while an upload is in flight.
pub fn upload_layout(body: Rect, show_progress: bool) -> UploadLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if show_progress { 3 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(body);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[2]);

    UploadLayout {
        upload_form: rows[0],
        progress: rows[1],
        summary: content[0],
        results: content[1],
    }
}

pub fn dashboard_layout(body: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stat cards
            Constraint::Min(0),    // chart + table
            Constraint::Length(1), // status line
        ])
        .split(body);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    DashboardLayout {
        documents_scanned: cards[0],
        sensitive_entities: cards[1],
        compliance_score: cards[2],
        risk_chart: content[0],
        scan_table: content[1],
        status: rows[2],
    }
}

// src/ui/widgets/mod.rs

// One module per screen region. Each exposes a `render_*` function taking the
// frame, the app state, and the area computed in `ui::layout`.

pub mod analysis_summary; // Counts, document type, and risk label of the last upload.
pub mod findings;         // The findings list with the catalog details pane.
pub mod footer;           // Key hints and export status.
pub mod header;           // View tabs.
pub mod risk_chart;       // High/Medium/Low bar chart.
pub mod scan_table;       // Recent scans table.
pub mod stats;            // Dashboard counters and status line.
pub mod upload_form;      // File path input and progress indicator.

use crate::core::models::RiskLevel;
use ratatui::style::{Color, Modifier, Style};

/// Style for a risk label, chosen from its lowercase class suffix.
pub fn risk_style(risk: &RiskLevel) -> Style {
    let color = match risk.class_suffix().as_str() {
        "critical" => Color::Magenta,
        "high" => Color::Red,
        "medium" => Color::Yellow,
        "low" => Color::Green,
        _ => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// src/ui/widgets/risk_chart.rs

use crate::app::App;
use crate::core::models::{RiskDistribution, RiskLevel};
use crate::ui::widgets::risk_style;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

/// Renders the risk distribution as a three-bar chart.
pub fn render_risk_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Risk Distribution");

    let Some(snapshot) = &app.dashboard.snapshot else {
        frame.render_widget(Paragraph::new("No data yet.").block(block), area);
        return;
    };

    let bars = risk_bars(&snapshot.risk_distribution);
    let bar_width = (area.width.saturating_sub(2) / 3).saturating_sub(1).clamp(1, 12);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

/// One bar per category, High/Medium/Low, coloured like the matching risk label.
pub fn risk_bars(distribution: &RiskDistribution) -> Vec<Bar<'static>> {
    distribution
        .chart_values()
        .into_iter()
        .map(|(label, value)| {
            let style = risk_style(&RiskLevel::parse(label));
            Bar::default()
                .label(Line::from(label))
                .value(value)
                .style(style)
                .value_style(style.reversed())
        })
        .collect()
}

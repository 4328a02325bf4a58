// src/ui/widgets/header.rs

use crate::app::{App, View};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the view tabs. `Tab` switches between them.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::iter().map(|view| Line::from(view.to_string())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("PrivGuard Console"))
        .select(app.view.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::new().bold().fg(Color::Yellow));
    frame.render_widget(tabs, area);
}

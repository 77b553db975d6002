//! Dashboard main renderer

use super::components::{body, footer, header};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::widgets::{Block, BorderType, Borders};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let area = f.area();
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain),
        area,
    );

    header::render_header(f, area, state);
    body::render_body(f, area, state);
    footer::render_footer(f, area, state);
}

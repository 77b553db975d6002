//! Dashboard footer component
//!
//! Renders the last-update time and control legend, or a pending notice

use super::super::state::DashboardState;
use super::super::utils::{alert_style, format_asctime, put_text};
use crate::consts::cli_consts::layout::{COLUMN_OFFSETS, CONTROL_LEGEND};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;

pub fn footer_text(state: &DashboardState) -> String {
    let updated = state
        .last_update()
        .map(format_asctime)
        .unwrap_or_else(|| "never".to_string());
    let stale = if state.is_stale() { " (stale)" } else { "" };
    format!("Last update: {}{}  -  {}", updated, stale, CONTROL_LEGEND)
}

/// Render the footer on the row just above the bottom border.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let row = area.height.saturating_sub(2);
    let (text, style) = match state.notice() {
        Some(notice) => (notice.message.clone(), alert_style()),
        None => (footer_text(state), Style::default()),
    };
    put_text(
        f.buffer_mut(),
        area,
        row,
        COLUMN_OFFSETS[0],
        &text,
        style,
        u16::MAX,
    );
}

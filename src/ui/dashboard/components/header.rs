//! Dashboard header component
//!
//! Renders the title line naming the attached instance

use super::super::state::DashboardState;
use super::super::utils::{key_style, put_text};
use crate::consts::cli_consts::layout::COLUMN_OFFSETS;
use crate::status::StatusRecord;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Modifier;

/// Title text for the given snapshot. The instance comes from the record
/// itself, so it reflects what the producer wrote rather than what was asked for.
pub fn title_text(record: Option<&StatusRecord>) -> String {
    let instance = record.and_then(StatusRecord::instance_label).unwrap_or("?");
    format!("Current Status: Instance {}", instance)
}

/// Render the title over the top border.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let title = title_text(state.record());
    put_text(
        f.buffer_mut(),
        area,
        0,
        COLUMN_OFFSETS[0],
        &title,
        key_style().add_modifier(Modifier::BOLD),
        u16::MAX,
    );
}

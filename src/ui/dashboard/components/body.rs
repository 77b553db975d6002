//! Dashboard body component
//!
//! Renders the sorted key/value entries and the overflow warning

use super::super::layout::layout_body;
use super::super::state::DashboardState;
use super::super::utils::{alert_style, format_key_label, key_style, put_text, value_style};
use crate::consts::cli_consts::layout::{COLUMN_OFFSETS, OVERFLOW_WARNING};

use ratatui::Frame;
use ratatui::layout::Rect;

pub fn render_body(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(record) = state.record() else {
        return;
    };
    let layout = layout_body(record, area.width, area.height, state.layout);

    // In two-column mode the left entry must stop short of the right column.
    let left_width = if state.layout.single_column(area.width) {
        u16::MAX
    } else {
        COLUMN_OFFSETS[1] - COLUMN_OFFSETS[0] - 1
    };

    let buf = f.buffer_mut();
    for placement in &layout.placements {
        let width = if placement.col == COLUMN_OFFSETS[0] {
            left_width
        } else {
            u16::MAX
        };
        let label = format_key_label(placement.key);
        let end = put_text(buf, area, placement.row, placement.col, &label, key_style(), width);
        let used = end.saturating_sub(placement.col);
        put_text(
            buf,
            area,
            placement.row,
            end,
            placement.value,
            value_style(),
            width.saturating_sub(used),
        );
    }

    if let Some(row) = layout.overflow_row {
        put_text(
            buf,
            area,
            row,
            COLUMN_OFFSETS[0],
            OVERFLOW_WARNING,
            alert_style(),
            u16::MAX,
        );
    }
}

//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::layout::KEY_DISPLAY_WIDTH;
use chrono::NaiveDateTime;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};

pub fn key_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn value_style() -> Style {
    Style::default().fg(Color::Green)
}

/// White on red, for anything the operator needs to act on.
pub fn alert_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Key label of a body entry, right-justified and followed by the separator.
pub fn format_key_label(key: &str) -> String {
    format!("{:>width$} : ", key, width = KEY_DISPLAY_WIDTH)
}

/// Format a timestamp the way `asctime` does, e.g. `Mon Oct 19 09:05:03 2026`.
pub fn format_asctime(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Write `text` at (`row`, `col`) relative to `area`, at most `max_width`
/// cells wide and never over the right border. Returns the column just past
/// the written text.
pub fn put_text(
    buf: &mut Buffer,
    area: Rect,
    row: u16,
    col: u16,
    text: &str,
    style: Style,
    max_width: u16,
) -> u16 {
    let inner_right = area.width.saturating_sub(1);
    if row >= area.height || col >= inner_right {
        return col;
    }
    let room = (inner_right - col).min(max_width);
    let (x, _) = buf.set_stringn(area.x + col, area.y + row, text, usize::from(room), style);
    x.saturating_sub(area.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn key_label_is_right_justified() {
        assert_eq!(format_key_label("NET"), "     NET : ");
        assert_eq!(format_key_label("LONGKEY99"), "LONGKEY99 : ");
    }

    #[test]
    fn put_text_stops_before_right_border() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let end = put_text(&mut buf, area, 1, 2, "abcdefghij", Style::default(), u16::MAX);
        assert_eq!(end, 9);
        assert_eq!(buf[(8, 1)].symbol(), "g");
        assert_eq!(buf[(9, 1)].symbol(), " ");
    }

    #[test]
    fn asctime_pads_single_digit_days() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 5)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(format_asctime(&ts), "Mon Oct  5 09:05:03 2026");
    }
}

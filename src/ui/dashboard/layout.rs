//! Body layout for the status screen
//!
//! Entries flow left to right across two fixed columns, then down. Rows never
//! decrease, and anything below the last usable row collapses into a single
//! overflow warning. Screens too narrow for the right column get one column.

use crate::consts::cli_consts::layout::{
    BODY_TOP_ROW, COLUMN_OFFSETS, GROUP_PREFIX_LEN, MIN_TWO_COLUMN_WIDTH, RESERVED_BOTTOM_ROWS,
};
use crate::status::StatusRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// One entry per row instead of two.
    pub onecol: bool,
    /// Insert a blank row whenever the 3-character key prefix changes.
    pub group_prefixes: bool,
}

impl LayoutOptions {
    /// Whether entries go one per row on a screen `width` columns wide.
    pub fn single_column(&self, width: u16) -> bool {
        self.onecol || width < MIN_TWO_COLUMN_WIDTH
    }
}

/// Where a single entry lands on screen, relative to the dashboard area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub row: u16,
    pub col: u16,
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyLayout<'a> {
    pub placements: Vec<Placement<'a>>,
    /// Row of the "increase window size" warning, if entries were cut off.
    pub overflow_row: Option<u16>,
}

#[derive(Debug)]
struct Cursor {
    row: u16,
    flip: bool,
}

impl Cursor {
    fn new() -> Self {
        Self {
            row: BODY_TOP_ROW,
            flip: false,
        }
    }

    fn col(&self) -> u16 {
        COLUMN_OFFSETS[usize::from(self.flip)]
    }

    fn advance(&mut self, onecol: bool) {
        if onecol || self.flip {
            self.next_row();
        } else {
            self.flip = true;
        }
    }

    /// Close a half-filled row, then leave one blank row.
    fn break_group(&mut self) {
        if self.flip {
            self.next_row();
        }
        self.row = self.row.saturating_add(1);
    }

    fn next_row(&mut self) {
        self.row = self.row.saturating_add(1);
        self.flip = false;
    }
}

/// Lay out the body entries of `record` for a screen `width` by `height` cells.
pub fn layout_body(
    record: &StatusRecord,
    width: u16,
    height: u16,
    options: LayoutOptions,
) -> BodyLayout<'_> {
    let onecol = options.single_column(width);
    let limit = height.saturating_sub(RESERVED_BOTTOM_ROWS);
    let mut cursor = Cursor::new();
    let mut layout = BodyLayout::default();
    let mut last_prefix = None;

    for (key, value) in record.body_entries() {
        let prefix = key_prefix(key);
        if options.group_prefixes && last_prefix.is_some_and(|p| p != prefix) {
            cursor.break_group();
        }
        last_prefix = Some(prefix);

        if cursor.row >= limit {
            // No warning when the screen has no body rows at all; it would
            // land on the title or the border.
            layout.overflow_row = (limit >= BODY_TOP_ROW).then_some(limit);
            break;
        }
        layout.placements.push(Placement {
            row: cursor.row,
            col: cursor.col(),
            key,
            value,
        });
        cursor.advance(onecol);
    }
    layout
}

fn key_prefix(key: &str) -> &str {
    key.char_indices()
        .nth(GROUP_PREFIX_LEN)
        .map_or(key, |(idx, _)| &key[..idx])
}

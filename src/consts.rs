pub mod cli_consts {
    //! Dashboard Constants
    //!
    //! This module contains the constants for status buffer access and the
    //! dashboard layout, organized by functional area.

    // =============================================================================
    // STATUS BUFFER FORMAT
    // =============================================================================

    /// Reserved key naming the instance that produced a record.
    pub const INSTANCE_KEY: &str = "INSTANCE";

    /// Largest valid instance id. Instance ids are six bits wide.
    pub const MAX_INSTANCE_ID: u32 = 0x3f;

    /// Size of one header card in a status buffer
    pub const STATUS_CARD_SIZE: usize = 80;

    /// Width of the keyword field at the start of each card
    pub const KEYWORD_WIDTH: usize = 8;

    /// Bytes following the keyword on cards that carry a value
    pub const VALUE_INDICATOR: &[u8] = b"= ";

    /// Keyword of the card terminating a status buffer
    pub const END_KEYWORD: &str = "END";

    /// File name prefix of per-instance buffers; the instance id is appended.
    pub const STATUS_FILE_PREFIX: &str = "pipeline_status_";

    /// Where status buffers live unless overridden
    pub const DEFAULT_STATUS_DIR: &str = "/dev/shm";

    // =============================================================================
    // DASHBOARD LAYOUT
    // =============================================================================

    /// Layout constants for the status screen
    pub mod layout {
        /// X offsets of the two body columns
        pub const COLUMN_OFFSETS: [u16; 2] = [2, 40];

        /// Narrowest screen that still fits a right-column key label inside
        /// the border. Below this the body falls back to one column.
        pub const MIN_TWO_COLUMN_WIDTH: u16 = COLUMN_OFFSETS[1] + KEY_DISPLAY_WIDTH as u16 + 4;

        /// First body row, below the title and a spacer row
        pub const BODY_TOP_ROW: u16 = 2;

        /// Rows kept clear at the bottom: overflow warning, footer, border
        pub const RESERVED_BOTTOM_ROWS: u16 = 3;

        /// Keys are right-justified to this width
        pub const KEY_DISPLAY_WIDTH: usize = 8;

        /// Length of the key prefix used for optional row grouping
        pub const GROUP_PREFIX_LEN: usize = 3;

        /// Shown in place of entries that do not fit
        pub const OVERFLOW_WARNING: &str = "-- Increase window size --";

        /// Control legend shown in the footer
        pub const CONTROL_LEGEND: &str = "q quit, 0-9 select, +/- step";
    }

    // =============================================================================
    // REFRESH TIMING
    // =============================================================================

    /// Refresh loop timing
    pub mod timing {
        use std::time::Duration;

        /// Default delay between redraws (milliseconds)
        pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 250;

        /// Lower bound accepted for the refresh interval (milliseconds)
        pub const MIN_REFRESH_INTERVAL_MS: u64 = 10;

        /// How long an inline error stays on the footer (milliseconds)
        pub const NOTICE_HOLD_MS: u64 = 1000;

        /// Helper function to get the notice hold duration
        pub const fn notice_hold() -> Duration {
            Duration::from_millis(NOTICE_HOLD_MS)
        }
    }
}

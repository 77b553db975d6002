//! Dashboard state management
//!
//! Holds what the renderer needs between ticks: the last good snapshot,
//! whether it is stale, and any transient notice for the footer.

use super::layout::LayoutOptions;
use crate::status::StatusRecord;
use chrono::NaiveDateTime;
use std::time::Instant;

/// A short-lived message shown in place of the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    /// Last snapshot read successfully.
    record: Option<StatusRecord>,
    /// When `record` was read.
    last_update: Option<NaiveDateTime>,
    /// Set when the latest refresh failed and `record` is from an earlier tick.
    stale: bool,
    notice: Option<Notice>,
    pub layout: LayoutOptions,
}

impl DashboardState {
    pub fn new(layout: LayoutOptions) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn record(&self) -> Option<&StatusRecord> {
        self.record.as_ref()
    }

    pub fn last_update(&self) -> Option<&NaiveDateTime> {
        self.last_update.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replace the snapshot with a freshly read one.
    pub fn set_record(&mut self, record: StatusRecord, read_at: NaiveDateTime) {
        self.record = Some(record);
        self.last_update = Some(read_at);
        self.stale = false;
    }

    /// Keep showing the previous snapshot after a failed read.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn show_notice(&mut self, message: impl Into<String>, expires_at: Instant) {
        self.notice = Some(Notice {
            message: message.into(),
            expires_at,
        });
    }

    /// Drop the notice once its hold time has passed.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[test]
    fn notice_expires_after_hold() {
        let mut state = DashboardState::default();
        let now = Instant::now();
        state.show_notice("No status buffer for instance 7", now + Duration::from_secs(1));

        state.expire_notice(now + Duration::from_millis(500));
        assert!(state.notice().is_some());

        state.expire_notice(now + Duration::from_secs(1));
        assert!(state.notice().is_none());
    }

    #[test]
    fn fresh_record_clears_staleness() {
        let mut state = DashboardState::default();
        let ts = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        state.set_record(StatusRecord::new(), ts);
        state.mark_stale();
        assert!(state.is_stale());
        assert!(state.record().is_some());

        state.set_record(StatusRecord::new(), ts);
        assert!(!state.is_stale());
        assert_eq!(state.last_update(), Some(&ts));
    }
}

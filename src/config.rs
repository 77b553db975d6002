//! Dashboard configuration.
//!
//! There is no configuration file; everything comes from the command line
//! (and `PIPELINE_STATUS_DIR` for the buffer location).

use crate::consts::cli_consts::timing::{DEFAULT_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS};
use crate::ui::dashboard::LayoutOptions;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Delay between redraws. Bounds redraw rate and CPU use.
    pub interval: Duration,
    pub layout: LayoutOptions,
}

impl DashboardConfig {
    /// Build a configuration, clamping the interval to the supported minimum.
    pub fn new(interval_ms: u64, onecol: bool, group_prefixes: bool) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(MIN_REFRESH_INTERVAL_MS)),
            layout: LayoutOptions {
                onecol,
                group_prefixes,
            },
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS, false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The default configuration redraws four times a second in two columns.
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.layout, LayoutOptions::default());
    }

    #[test]
    // Intervals below the minimum are raised to it.
    fn test_interval_is_clamped() {
        let config = DashboardConfig::new(0, true, true);
        assert_eq!(config.interval, Duration::from_millis(MIN_REFRESH_INTERVAL_MS));
        assert!(config.layout.onecol);
        assert!(config.layout.group_prefixes);
    }
}

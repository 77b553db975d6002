//! TUI mode execution

use super::messages::{print_session_exit_success, print_session_interrupted};
use super::terminal::Session;
use crate::config::DashboardConfig;
use crate::status::{StatusProvider, StatusSource};
use crate::ui::{Dashboard, ExitReason, TerminalInput};
use log::{info, warn};
use std::error::Error;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and guaranteed cleanup
/// 2. The dashboard loop
/// 3. Reporting how the session ended
///
/// # Arguments
/// * `source` - Status source already attached to the starting instance
/// * `config` - Refresh interval and layout options
///
/// # Returns
/// * `Ok(())` - The operator quit or the process was interrupted
/// * `Err` - The first status read failed or the terminal failed
pub async fn run_tui_mode<P: StatusProvider>(
    source: StatusSource<P>,
    config: DashboardConfig,
) -> Result<(), Box<dyn Error>> {
    info!(
        "starting dashboard on instance {} (interval {:?})",
        source.instance_id(),
        config.interval
    );

    let mut dashboard = Dashboard::new(source, TerminalInput, config);
    let mut session = Session::acquire()?;
    let result = dashboard.run(&mut session, shutdown_signal()).await;
    // Restore the terminal before anything is printed.
    drop(session);

    match result? {
        ExitReason::Quit => print_session_exit_success(),
        ExitReason::Interrupted => print_session_interrupted(),
    }
    Ok(())
}

/// Resolves when the process is asked to stop from outside.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::hangup()),
        ) {
            (Ok(mut terminate), Ok(mut hangup)) => {
                tokio::select! {
                    _ = wait_for_ctrl_c() => {}
                    _ = terminate.recv() => {}
                    _ = hangup.recv() => {}
                }
            }
            _ => wait_for_ctrl_c().await,
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a handler there is nothing to wait for; rely on the `q` key.
        warn!("cannot listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

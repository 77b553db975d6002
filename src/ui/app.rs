//! Dashboard loop
//!
//! One tick is refresh → layout → draw → sleep → drain input. Reconnects
//! requested by the operator happen synchronously within the tick that read
//! the key, so a refresh never races a reconnect.

use crate::config::DashboardConfig;
use crate::consts::cli_consts::timing::notice_hold;
use crate::session::terminal::Session;
use crate::status::{StatusError, StatusProvider, StatusSource};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::input::{Command, InputSource};
use chrono::Local;
use log::{debug, error, info, warn};
use ratatui::backend::Backend;
use std::future::Future;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum RunState {
    Running,
    Exiting,
}

/// Why the loop ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitReason {
    /// The operator pressed `q`.
    Quit,
    /// The process received an interrupt or termination signal.
    Interrupted,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The very first read failed, so there is nothing to show.
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub struct Dashboard<P: StatusProvider, I: InputSource> {
    source: StatusSource<P>,
    input: I,
    state: DashboardState,
    config: DashboardConfig,
    run_state: RunState,
    ticks: u64,
}

impl<P: StatusProvider, I: InputSource> Dashboard<P, I> {
    pub fn new(source: StatusSource<P>, input: I, config: DashboardConfig) -> Self {
        Self {
            source,
            input,
            state: DashboardState::new(config.layout),
            config,
            run_state: RunState::Running,
            ticks: 0,
        }
    }

    #[allow(unused)]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    #[allow(unused)]
    pub fn instance_id(&self) -> u32 {
        self.source.instance_id()
    }

    #[allow(unused)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Runs ticks until the operator quits or `interrupt` resolves.
    pub async fn run<B, F>(
        &mut self,
        session: &mut Session<B>,
        interrupt: F,
    ) -> Result<ExitReason, DashboardError>
    where
        B: Backend,
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        let mut reason = ExitReason::Quit;

        while self.run_state == RunState::Running {
            self.tick(session)?;

            tokio::select! {
                _ = tokio::time::sleep(self.config.interval) => {}
                _ = &mut interrupt => {
                    info!("interrupted, leaving dashboard");
                    self.run_state = RunState::Exiting;
                    reason = ExitReason::Interrupted;
                }
            }

            if self.run_state == RunState::Running {
                self.drain_input()?;
            }
        }
        Ok(reason)
    }

    /// Refresh the snapshot and draw one frame.
    ///
    /// A read failure is fatal only on the first tick. Later failures keep
    /// the previous snapshot on screen, marked stale.
    pub fn tick<B: Backend>(&mut self, session: &mut Session<B>) -> Result<(), DashboardError> {
        match self.source.refresh() {
            Ok(record) => self.state.set_record(record, Local::now().naive_local()),
            Err(e) if self.ticks == 0 => {
                error!("initial status read failed: {e}");
                return Err(e.into());
            }
            Err(e) => {
                warn!("status read failed, keeping last snapshot: {e}");
                self.state.mark_stale();
            }
        }
        self.ticks += 1;

        self.state.expire_notice(Instant::now());
        session.draw(|f| render_dashboard(f, &self.state))?;
        Ok(())
    }

    /// Apply every key queued since the last tick, in order.
    pub fn drain_input(&mut self) -> std::io::Result<()> {
        for key in self.input.pending_keys()? {
            if let Some(command) = Command::from_key(&key) {
                self.dispatch(command);
            }
            if self.run_state == RunState::Exiting {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) {
        debug!("dispatching {command}");
        match command {
            Command::Quit => self.run_state = RunState::Exiting,
            Command::Select(id) if id == self.source.instance_id() => {}
            Command::Select(id) => {
                if let Err(e) = self.source.select(id) {
                    warn!("{e}");
                    self.state.show_notice(
                        format!("No status buffer for instance {}", e.requested_instance()),
                        Instant::now() + notice_hold(),
                    );
                }
            }
            Command::Step(delta) => self.source.adjust(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusRecord;
    use crate::status::provider::memory::MemoryProvider;
    use crate::ui::dashboard::LayoutOptions;
    use crate::ui::input::scripted::ScriptedInput;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn config() -> DashboardConfig {
        DashboardConfig {
            interval: Duration::from_millis(1),
            layout: LayoutOptions::default(),
        }
    }

    fn dashboard(
        provider: &MemoryProvider,
        start: u32,
        input: ScriptedInput,
    ) -> Dashboard<MemoryProvider, ScriptedInput> {
        let source = StatusSource::open(provider.clone(), start).unwrap();
        Dashboard::new(source, input, config())
    }

    fn session() -> Session<TestBackend> {
        Session::with_backend(TestBackend::new(80, 24)).unwrap()
    }

    fn screen_text(session: &Session<TestBackend>) -> String {
        let buf = session.terminal().backend().buffer();
        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol())
            .collect()
    }

    #[test]
    fn queued_keys_are_all_applied_before_exit() {
        let provider = MemoryProvider::with_instances(&[0, 1, 2, 3]);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new().then("12+-q"));

        dash.drain_input().unwrap();
        assert_eq!(dash.instance_id(), 2);
        assert_eq!(dash.run_state(), RunState::Exiting);
    }

    #[test]
    fn step_to_missing_instance_is_silent() {
        let provider = MemoryProvider::with_instances(&[0, 1, 2, 3]);
        let mut dash = dashboard(&provider, 3, ScriptedInput::new().then("+"));

        dash.drain_input().unwrap();
        assert_eq!(dash.instance_id(), 3);
        assert!(dash.state().notice().is_none());
    }

    #[test]
    fn select_missing_instance_shows_notice() {
        let provider = MemoryProvider::with_instances(&[0, 1]);
        let mut dash = dashboard(&provider, 1, ScriptedInput::new().then("7"));
        let mut session = session();

        dash.drain_input().unwrap();
        assert_eq!(dash.instance_id(), 1);
        dash.tick(&mut session).unwrap();
        assert!(screen_text(&session).contains("No status buffer for instance 7"));
        assert!(screen_text(&session).contains("Current Status: Instance 1"));
    }

    #[test]
    fn selecting_current_instance_is_a_no_op() {
        let provider = MemoryProvider::with_instances(&[0, 1]);
        let mut dash = dashboard(&provider, 1, ScriptedInput::new().then("1"));

        dash.drain_input().unwrap();
        assert_eq!(dash.instance_id(), 1);
        assert!(dash.state().notice().is_none());
    }

    #[test]
    fn first_read_failure_is_fatal() {
        let provider = MemoryProvider::with_instances(&[0]);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new());
        provider.remove(0);

        let err = dash.tick(&mut session()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Status(StatusError::ReadFailure { .. })
        ));
    }

    #[test]
    fn later_read_failure_keeps_last_snapshot() {
        let provider = MemoryProvider::with_instances(&[0]);
        let record: StatusRecord = [("INSTANCE", "0"), ("NETSTAT", "receiving")]
            .into_iter()
            .collect();
        provider.put(0, record);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new());
        let mut session = session();

        dash.tick(&mut session).unwrap();
        provider.remove(0);
        dash.tick(&mut session).unwrap();

        assert!(dash.state().is_stale());
        let screen = screen_text(&session);
        assert!(screen.contains("NETSTAT : receiving"));
        assert!(screen.contains("(stale)"));
    }

    #[tokio::test]
    async fn quit_key_ends_run_within_one_tick() {
        let provider = MemoryProvider::with_instances(&[0]);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new().then("q"));
        let mut session = session();

        let reason = dash
            .run(&mut session, std::future::pending::<()>())
            .await
            .unwrap();
        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(dash.ticks, 1);
    }

    #[tokio::test]
    async fn interrupt_ends_run() {
        let provider = MemoryProvider::with_instances(&[0]);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new());
        let mut session = session();

        let reason = dash
            .run(&mut session, std::future::ready(()))
            .await
            .unwrap();
        assert_eq!(reason, ExitReason::Interrupted);
        assert_eq!(dash.run_state(), RunState::Exiting);
    }

    #[tokio::test]
    async fn run_switches_instances_between_ticks() {
        let provider = MemoryProvider::with_instances(&[0, 1, 2]);
        let mut dash = dashboard(&provider, 0, ScriptedInput::new().then("+").then("+").then("q"));
        let mut session = session();

        dash.run(&mut session, std::future::pending::<()>())
            .await
            .unwrap();
        assert_eq!(dash.instance_id(), 2);
        assert!(screen_text(&session).contains("Current Status: Instance 2"));
    }
}

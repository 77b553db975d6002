//! The currently attached status instance
//!
//! `StatusSource` owns the one live connection the dashboard reads from.
//! A reconnect either fully replaces the connection or leaves it untouched.

use super::error::StatusError;
use super::provider::StatusProvider;
use super::record::StatusRecord;
use crate::consts::cli_consts::MAX_INSTANCE_ID;
use log::{debug, info};
use std::fmt;

#[derive(Debug)]
struct Connection<H> {
    instance_id: u32,
    handle: H,
}

pub struct StatusSource<P: StatusProvider> {
    provider: P,
    current: Connection<P::Handle>,
}

impl<P> fmt::Debug for StatusSource<P>
where
    P: StatusProvider + fmt::Debug,
    P::Handle: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSource")
            .field("provider", &self.provider)
            .field("current", &self.current)
            .finish()
    }
}

impl<P: StatusProvider> StatusSource<P> {
    /// Attaches to `instance_id`. There is no prior state to fall back to,
    /// so a failure here is returned to the caller as-is.
    pub fn open(mut provider: P, instance_id: u32) -> Result<Self, StatusError> {
        let (instance_id, handle) = attach(&mut provider, i64::from(instance_id))?;
        info!("connected to status buffer instance {instance_id}");
        Ok(Self {
            provider,
            current: Connection {
                instance_id,
                handle,
            },
        })
    }

    pub fn instance_id(&self) -> u32 {
        self.current.instance_id
    }

    /// Reconnects to `instance_id`, replacing the current connection only on success.
    pub fn connect(&mut self, instance_id: u32) -> Result<(), StatusError> {
        self.connect_requested(i64::from(instance_id))
    }

    /// Reads a fresh snapshot from the current instance.
    pub fn refresh(&self) -> Result<StatusRecord, StatusError> {
        self.provider
            .read(&self.current.handle)
            .map_err(|source| StatusError::ReadFailure {
                instance_id: self.current.instance_id,
                source,
            })
    }

    /// Steps to a neighbouring instance. Failures are dropped: probing for an
    /// instance that does not exist must never disturb the current view.
    pub fn adjust(&mut self, delta: i64) {
        let target = i64::from(self.current.instance_id) + delta;
        if let Err(e) = self.connect_requested(target) {
            debug!("ignoring step to instance {target}: {e}");
        }
    }

    /// Switches to an explicitly requested instance. The error is returned so
    /// the caller can tell the user.
    pub fn select(&mut self, instance_id: u32) -> Result<(), StatusError> {
        self.connect(instance_id)
    }

    fn connect_requested(&mut self, requested: i64) -> Result<(), StatusError> {
        let (instance_id, handle) = attach(&mut self.provider, requested)?;
        let previous = std::mem::replace(
            &mut self.current,
            Connection {
                instance_id,
                handle,
            },
        );
        info!(
            "switched status buffer instance {} -> {}",
            previous.instance_id, instance_id
        );
        Ok(())
    }
}

fn attach<P: StatusProvider>(
    provider: &mut P,
    requested: i64,
) -> Result<(u32, P::Handle), StatusError> {
    let instance_id = u32::try_from(requested)
        .ok()
        .filter(|id| *id <= MAX_INSTANCE_ID)
        .ok_or(StatusError::InvalidInstanceRequest { requested })?;
    let handle = provider
        .attach(instance_id)
        .map_err(|source| StatusError::ConnectionFailure {
            instance_id,
            source,
        })?;
    Ok((instance_id, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::provider::memory::MemoryProvider;

    fn open_at(ids: &[u32], start: u32) -> (MemoryProvider, StatusSource<MemoryProvider>) {
        let provider = MemoryProvider::with_instances(ids);
        let source = StatusSource::open(provider.clone(), start).unwrap();
        (provider, source)
    }

    #[test]
    fn open_fails_for_missing_instance() {
        let provider = MemoryProvider::with_instances(&[0]);
        let err = StatusSource::open(provider, 5).unwrap_err();
        assert!(matches!(
            err,
            StatusError::ConnectionFailure { instance_id: 5, .. }
        ));
    }

    #[test]
    fn debug_output_names_attached_instance() {
        let (_, source) = open_at(&[0, 4], 4);
        let rendered = format!("{source:?}");
        assert!(rendered.starts_with("StatusSource"));
        assert!(rendered.contains("instance_id: 4"));
    }

    #[test]
    fn adjust_to_missing_instance_keeps_connection() {
        let (_, mut source) = open_at(&[0, 1, 2, 3], 3);
        source.adjust(1);
        assert_eq!(source.instance_id(), 3);
        assert_eq!(source.refresh().unwrap().instance_label(), Some("3"));
    }

    #[test]
    fn adjust_below_zero_is_ignored() {
        let (_, mut source) = open_at(&[0, 1], 0);
        source.adjust(-1);
        assert_eq!(source.instance_id(), 0);
    }

    #[test]
    fn adjust_moves_to_existing_neighbour() {
        let (_, mut source) = open_at(&[0, 1, 2], 1);
        source.adjust(1);
        assert_eq!(source.instance_id(), 2);
        source.adjust(-1);
        assert_eq!(source.instance_id(), 1);
    }

    #[test]
    fn select_missing_instance_reports_its_id() {
        let (_, mut source) = open_at(&[0, 1], 1);
        let err = source.select(7).unwrap_err();
        assert_eq!(err.requested_instance(), 7);
        assert!(err.to_string().contains('7'));
        assert_eq!(source.instance_id(), 1);
        assert_eq!(source.refresh().unwrap().instance_label(), Some("1"));
    }

    #[test]
    fn select_out_of_range_is_invalid_request() {
        let (_, mut source) = open_at(&[0], 0);
        let err = source.select(MAX_INSTANCE_ID + 1).unwrap_err();
        assert!(matches!(err, StatusError::InvalidInstanceRequest { .. }));
    }

    #[test]
    fn refresh_fails_when_instance_vanishes() {
        let (provider, source) = open_at(&[0], 0);
        provider.remove(0);
        assert!(matches!(
            source.refresh(),
            Err(StatusError::ReadFailure { instance_id: 0, .. })
        ));
    }
}

//! Status provider abstraction
//!
//! The storage behind a status buffer lives outside this program. Anything
//! that can attach to a numbered instance and read back a key/value snapshot
//! can drive the dashboard.

use super::error::ProviderError;
use super::record::StatusRecord;

pub trait StatusProvider {
    /// Connection handle for one attached instance.
    type Handle;

    /// Attach to status buffer `instance_id`.
    fn attach(&mut self, instance_id: u32) -> Result<Self::Handle, ProviderError>;

    /// Read the current contents of an attached buffer.
    fn read(&self, handle: &Self::Handle) -> Result<StatusRecord, ProviderError>;
}

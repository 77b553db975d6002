//! Status buffer access
//!
//! Provider abstraction, the card-file provider used in production, and the
//! `StatusSource` that tracks which instance the dashboard is attached to.

pub mod card_file;
pub mod error;
pub mod provider;
pub mod record;
pub mod source;

pub use card_file::CardFileProvider;
pub use error::StatusError;
pub use provider::StatusProvider;
pub use record::StatusRecord;
pub use source::StatusSource;

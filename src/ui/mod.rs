// Module declarations
mod app;
pub mod dashboard;
pub mod input;
// Re-exports for external use
pub use app::{Dashboard, ExitReason};
pub use input::TerminalInput;

//! Status dashboard implementation
//!
//! Split into layout, state and per-region rendering components

pub mod components;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use layout::LayoutOptions;
pub use renderer::render_dashboard;
pub use state::DashboardState;

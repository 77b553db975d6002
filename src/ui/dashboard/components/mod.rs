//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod body;
pub mod footer;
pub mod header;

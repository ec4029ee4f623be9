// Utility functions
// Helper types and text formatting shared by components

pub mod fetch_state;
pub mod format;

pub use fetch_state::FetchState;
pub use format::{capitalize, display_name, full_name, location_label};

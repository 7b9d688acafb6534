// Parsing utilities
pub mod parse_float;
pub mod parse_port;

// Display helpers
pub mod truncate;
pub mod glances;

// Re-export all utilities for convenient access
pub use parse_float::parse_leading_float;
pub use parse_port::parse_port;
pub use truncate::truncate_with_ellipsis;
pub use glances::{glances_url, split_host_header};

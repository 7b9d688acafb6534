// Backend API modules
pub mod client;
pub mod error;
pub mod instance;
pub mod services;
pub mod diagnostics;

// Re-export commonly used items
pub use client::{set_silent, ApiClient};
pub use error::ApiError;
pub use instance::load_instance_info;
pub use services::{check_service, load_services};
pub use diagnostics::{network_scan, system_info};

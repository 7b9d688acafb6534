pub mod actions;
pub mod dashboard;
pub mod helpers;

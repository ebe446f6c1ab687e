//! Background tasks that feed the dashboard

pub mod core;
pub mod loader;
pub mod refresh;

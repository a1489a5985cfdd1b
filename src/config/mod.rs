// src/config/mod.rs
pub mod dashboard;
pub mod launch;

// Re-export commonly used types
pub use dashboard::{DashboardConfig, SiteOption};
pub use launch::{LaunchRecord, Outcome, SiteSelection};

//! Typed alert-monitoring API client crate used by the dashboard backend.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pacer;

pub use client::AlertClient;
pub use config::AlertConfig;
pub use error::{AlertError, Result};
pub use models::{Issue, IssueDetails, IssueEvent, Severity};
pub use pacer::RequestPacer;

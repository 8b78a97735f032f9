use serde::{Deserialize, Serialize};

use super::{IssueEvent, Severity};

/// Represents a deduplicated exception aggregated across occurrences, as
/// returned by the alert-monitoring endpoints.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_id: String,
    pub exception_class: String,
    pub exception_message: String,
    #[serde(default)]
    pub exception_line_number: Option<u32>,
    pub throwing_class_name: String,
    pub last_seen: String,
    pub age: String,
    pub status: String,
    pub counter: u64,
    // Older payloads spell the field "seriarity" and carry free-form values.
    #[serde(alias = "seriarity")]
    pub severity: Severity,
    #[serde(default)]
    pub events: Option<Vec<IssueEvent>>,
}

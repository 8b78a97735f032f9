use serde::{Deserialize, Serialize};

/// One timestamped occurrence of an issue. Immutable once recorded; the
/// `issue_id` is a non-owning back-reference to the parent issue.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IssueEvent {
    pub event_id: String,
    pub issue_id: String,
    pub trace_id: String,
    pub occurrence_timestamp: String,
}

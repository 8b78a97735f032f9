use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::Issue;

/// Full per-issue payload: the aggregated issue plus the raw stack trace,
/// the trace id of the captured occurrence and the request context it was
/// recorded with.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    #[serde(default)]
    pub stack_trace: Vec<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
    #[serde(default)]
    pub extras: HashMap<String, Value>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

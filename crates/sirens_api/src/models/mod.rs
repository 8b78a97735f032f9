mod details;
mod event;
mod issue;
mod severity;

pub use details::IssueDetails;
pub use event::IssueEvent;
pub use issue::Issue;
pub use severity::Severity;

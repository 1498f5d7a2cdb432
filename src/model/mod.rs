mod datetime;
mod github;
mod jira;
mod result;
pub mod snapshot;

pub use datetime::parse_datetime;
pub use github::{Contributor, GithubCommit, GithubIssue, GithubRepo, PullRequest, State};
pub use jira::{Board, IssuePriority, IssueStatus, JiraIssue, JiraPayload, JiraSync};
pub use result::{Error, Result};
pub use snapshot::load_optional;

use crate::model::snapshot::{self, records_field, str_field, Snapshot};
use crate::model::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Workflow status of a Jira issue. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum IssueStatus {
    ToDo,
    InProgress,
    Done,
    Other(String),
}

impl From<&str> for IssueStatus {
    fn from(value: &str) -> Self {
        match value {
            "To Do" => Self::ToDo,
            "In Progress" => Self::InProgress,
            "Done" => Self::Done,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToDo => f.write_str("To Do"),
            Self::InProgress => f.write_str("In Progress"),
            Self::Done => f.write_str("Done"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum IssuePriority {
    Highest,
    High,
    Medium,
    Low,
    Other(String),
}

impl IssuePriority {
    /// `High` or `Highest`.
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High | Self::Highest)
    }
}

impl From<&str> for IssuePriority {
    fn from(value: &str) -> Self {
        match value {
            "Highest" => Self::Highest,
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct JiraIssue {
    pub issue_key: Option<String>,
    pub issue_type: Option<String>,
    pub summary: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
}

// Create
impl JiraIssue {
    pub fn new(status: Option<&str>, priority: Option<&str>) -> Self {
        Self {
            issue_key: None,
            issue_type: None,
            summary: None,
            status: status.map(IssueStatus::from),
            priority: priority.map(IssuePriority::from),
        }
    }

    pub fn has_status(&self, status: &IssueStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority.as_ref().is_some_and(IssuePriority::is_high)
    }
}

// Parser
impl Snapshot for JiraIssue {
    const KIND: &'static str = "jira issues";

    fn from_value(value: &Value) -> Self {
        Self {
            issue_key: str_field(value, "issue_key"),
            issue_type: str_field(value, "issue_type"),
            summary: str_field(value, "summary"),
            status: value["status"].as_str().map(IssueStatus::from),
            priority: value["priority"].as_str().map(IssuePriority::from),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
pub struct Board {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub board_type: Option<String>,
}

impl Snapshot for Board {
    const KIND: &'static str = "jira boards";

    fn from_value(value: &Value) -> Self {
        // Jira reports board ids as numbers, the sync store sometimes as strings.
        let id = match &value["id"] {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        };
        Self {
            id,
            name: str_field(value, "name"),
            board_type: str_field(value, "type"),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct JiraPayload {
    pub assigned_issues: Vec<JiraIssue>,
    pub boards: Vec<Board>,
    pub synced_at: Option<String>,
}

impl Snapshot for JiraPayload {
    const KIND: &'static str = "jira payload";

    fn from_value(value: &Value) -> Self {
        Self {
            assigned_issues: records_field(value, "assigned_issues"),
            boards: records_field(value, "boards"),
            synced_at: str_field(value, "synced_at"),
        }
    }
}

/// One Jira sync record as stored by the dashboard backend.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct JiraSync {
    pub jira_payload: Option<JiraPayload>,
    pub synced_at: Option<String>,
}

// Create
impl JiraSync {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self> {
        snapshot::read_record(path.as_ref())
    }

    pub fn new(payload: JiraPayload) -> Self {
        Self {
            jira_payload: Some(payload),
            synced_at: None,
        }
    }

    pub fn payload(&self) -> Option<&JiraPayload> {
        self.jira_payload.as_ref()
    }
}

// Parser
impl Snapshot for JiraSync {
    const KIND: &'static str = "jira sync";

    fn from_value(value: &Value) -> Self {
        let payload = &value["jira_payload"];
        let jira_payload = payload
            .is_object()
            .then(|| JiraPayload::from_value(payload));
        Self {
            jira_payload,
            synced_at: str_field(value, "synced_at"),
        }
    }
}

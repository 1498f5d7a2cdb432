use crate::model::snapshot::{self, date_field, str_field, truthy_field, u64_field, Snapshot};
use crate::model::Result;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// State of a GitHub pull request or issue.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum State {
    Open,
    Closed,
    Other(String),
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }
}

fn state_field(value: &Value) -> Option<State> {
    value["state"].as_str().map(State::from)
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct GithubRepo {
    pub name: Option<String>,
    pub full_name: Option<String>,
}

impl GithubRepo {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        snapshot::read_records(path.as_ref())
    }
}

impl Snapshot for GithubRepo {
    const KIND: &'static str = "repositories";

    fn from_value(value: &Value) -> Self {
        Self {
            name: str_field(value, "name"),
            full_name: str_field(value, "full_name"),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct GithubCommit {
    pub author: Option<String>,
    pub message: Option<String>,
    pub committed_date: Option<DateTime<FixedOffset>>,
}

// Create
impl GithubCommit {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        snapshot::read_records(path.as_ref())
    }

    pub fn new(
        author: impl ToString,
        message: impl ToString,
        committed_date: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            author: Some(author.to_string()),
            message: Some(message.to_string()),
            committed_date,
        }
    }
}

// Parser
impl Snapshot for GithubCommit {
    const KIND: &'static str = "commits";

    fn from_value(value: &Value) -> Self {
        // The sync store flattens commits, the REST API nests author under `commit`.
        let author = str_field(value, "author")
            .or_else(|| str_field(&value["author"], "login"))
            .or_else(|| str_field(&value["commit"]["author"], "name"));
        let message = str_field(value, "message").or_else(|| str_field(&value["commit"], "message"));
        let committed_date = date_field(value, "committed_date")
            .or_else(|| date_field(&value["commit"]["committer"], "date"));
        Self {
            author,
            message,
            committed_date,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, Hash, PartialEq)]
pub struct PullRequest {
    pub author: Option<String>,
    pub state: Option<State>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub merged_at: Option<DateTime<FixedOffset>>,
    /// `merged_at` was set in the snapshot, parseable as a date or not.
    pub merged: bool,
    pub additions: Option<u64>,
    pub deletions: Option<u64>,
    pub changed_files: Option<u64>,
    pub comments: Option<u64>,
}

// Create
impl PullRequest {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        snapshot::read_records(path.as_ref())
    }

    pub fn new(state: &str, created_at: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            state: Some(State::from(state)),
            created_at,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == Some(State::Open)
    }

    /// Merge timestamp recorded, whatever its format.
    pub fn has_merge(&self) -> bool {
        self.merged || self.merged_at.is_some()
    }

    /// Closed with a merge timestamp.
    pub fn is_merged(&self) -> bool {
        self.state == Some(State::Closed) && self.has_merge()
    }
}

// Parser
impl Snapshot for PullRequest {
    const KIND: &'static str = "pull requests";

    fn from_value(value: &Value) -> Self {
        let author = str_field(value, "author")
            .or_else(|| str_field(&value["user"], "login"))
            .or_else(|| str_field(&value["author"], "login"));
        Self {
            author,
            state: state_field(value),
            created_at: date_field(value, "created_at"),
            merged_at: date_field(value, "merged_at"),
            merged: truthy_field(value, "merged_at"),
            additions: u64_field(value, "additions"),
            deletions: u64_field(value, "deletions"),
            changed_files: u64_field(value, "changed_files"),
            comments: u64_field(value, "comments"),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct GithubIssue {
    pub state: Option<State>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

// Create
impl GithubIssue {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        snapshot::read_records(path.as_ref())
    }

    pub fn new(state: &str) -> Self {
        Self {
            state: Some(State::from(state)),
            created_at: None,
        }
    }

    pub fn has_state(&self, state: &State) -> bool {
        self.state.as_ref() == Some(state)
    }
}

// Parser
impl Snapshot for GithubIssue {
    const KIND: &'static str = "issues";

    fn from_value(value: &Value) -> Self {
        Self {
            state: state_field(value),
            created_at: date_field(value, "created_at"),
        }
    }
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
pub struct Contributor {
    pub login: Option<String>,
    pub contributions: Option<u64>,
}

// Create
impl Contributor {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        snapshot::read_records(path.as_ref())
    }

    pub fn new(login: impl ToString, contributions: u64) -> Self {
        Self {
            login: Some(login.to_string()),
            contributions: Some(contributions),
        }
    }
}

// Parser
impl Snapshot for Contributor {
    const KIND: &'static str = "contributors";

    fn from_value(value: &Value) -> Self {
        Self {
            login: str_field(value, "login"),
            contributions: u64_field(value, "contributions"),
        }
    }
}

use crate::model::{
    Board, Contributor, GithubCommit, GithubIssue, GithubRepo, JiraSync, PullRequest,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Raw collections gathered from the sync store. `None` means the source was never synced.
#[derive(Debug, Clone, Default)]
pub struct DataAnalysis {
    pub jira: Option<JiraSync>,
    pub repos: Option<Vec<GithubRepo>>,
    pub pull_requests: Option<Vec<PullRequest>>,
    pub issues: Option<Vec<GithubIssue>>,
    pub commits: Option<Vec<GithubCommit>>,
    pub contributors: Option<Vec<Contributor>>,
}

impl DataAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_jira(&mut self, jira: JiraSync) {
        self.jira = Some(jira);
    }

    pub fn insert_repos(&mut self, repos: Vec<GithubRepo>) {
        self.repos = Some(repos);
    }

    pub fn insert_pull_requests(&mut self, pull_requests: Vec<PullRequest>) {
        self.pull_requests = Some(pull_requests);
    }

    pub fn insert_issues(&mut self, issues: Vec<GithubIssue>) {
        self.issues = Some(issues);
    }

    pub fn insert_commits(&mut self, commits: Vec<GithubCommit>) {
        self.commits = Some(commits);
    }

    pub fn insert_contributors(&mut self, contributors: Vec<Contributor>) {
        self.contributors = Some(contributors);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraMetrics {
    pub total_issues: usize,
    pub in_progress: usize,
    pub to_do: usize,
    pub done: usize,
    pub high_priority: usize,
    pub highest_priority: usize,
    pub total_boards: usize,
    pub synced_at: Option<String>,
    pub boards: Vec<Board>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubMetrics {
    pub total_repos: usize,
    pub total_commits: usize,
    #[serde(rename = "totalPRs")]
    pub total_prs: usize,
    pub total_issues: usize,
    #[serde(rename = "mergedPRs")]
    pub merged_prs: usize,
    #[serde(rename = "openPRs")]
    pub open_prs: usize,
    pub open_issues: usize,
    pub closed_issues: usize,
    pub total_additions: u64,
    pub total_deletions: u64,
    pub net_changes: i64,
    #[serde(rename = "avgCommitsPerPR")]
    pub avg_commits_per_pr: f64,
    pub delivery_rate: f64,
    pub issue_resolution_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorMetrics {
    pub total_contributors: usize,
    pub top_contributors: Vec<Contributor>,
    pub total_contributions: u64,
    pub avg_contributions: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeQualityMetrics {
    pub avg_commit_message_length: u64,
    pub avg_files_changed: f64,
    pub avg_review_comments: f64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductivityTrend {
    Up,
    Stable,
}

impl fmt::Display for ProductivityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Stable => f.write_str("stable"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetrics {
    pub commits_last_30: usize,
    pub prs_last_30: usize,
    pub commits_last_7: usize,
    pub prs_last_7: usize,
    pub productivity_trend: ProductivityTrend,
}

/// One month of the activity chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub commits: usize,
    pub delivery: f64,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize)]
pub enum Area {
    Backend,
    Frontend,
    DevOps,
    #[serde(rename = "QA")]
    Qa,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend => f.write_str("Backend"),
            Self::Frontend => f.write_str("Frontend"),
            Self::DevOps => f.write_str("DevOps"),
            Self::Qa => f.write_str("QA"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Medium => f.write_str("Medium"),
            Self::High => f.write_str("High"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RiskArea {
    pub area: Area,
    pub risk: RiskLevel,
    /// Bounded to 0..=100.
    pub score: u32,
    pub insight: String,
}

impl RiskArea {
    pub fn new(area: Area, risk: RiskLevel, score: u32, insight: impl ToString) -> Self {
        Self {
            area,
            risk,
            score,
            insight: insight.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Healthy,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => f.write_str("HEALTHY"),
            Self::Moderate => f.write_str("MODERATE"),
            Self::Severe => f.write_str("SEVERE"),
        }
    }
}

/// One person's weighted share of commit and pull request activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonKnowledge {
    pub person: String,
    pub knowledge_score: f64,
    /// Percentage with one decimal.
    pub share_pct: f64,
    pub commits: usize,
    pub pull_requests: usize,
}

/// How concentrated repository knowledge is in a few people.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeConcentration {
    /// 0..=100, two decimals.
    pub risk_index: f64,
    pub severity: Severity,
    pub top1_share_pct: f64,
    pub top2_share_pct: f64,
    /// People holding at least a tenth of the knowledge.
    pub bus_factor: usize,
    pub total_knowledge_weight: f64,
    pub signals_count: usize,
    /// Highest score first.
    pub people: Vec<PersonKnowledge>,
    pub evidence: Vec<String>,
    pub insight: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user: String,
    pub commits: usize,
    pub prs_opened: usize,
    pub prs_merged: usize,
}

impl UserStats {
    pub fn new(user: impl ToString) -> Self {
        Self {
            user: user.to_string(),
            commits: 0,
            prs_opened: 0,
            prs_merged: 0,
        }
    }
}

/// Everything the dashboard shows, derived from one `DataAnalysis`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub generated_at: DateTime<Utc>,
    pub jira: Option<JiraMetrics>,
    pub github: Option<GithubMetrics>,
    pub contributors: ContributorMetrics,
    pub code_quality: CodeQualityMetrics,
    pub trends: TrendMetrics,
    pub chart: Vec<ChartPoint>,
    pub risks: [RiskArea; 4],
    pub knowledge: KnowledgeConcentration,
    pub user_stats: Vec<UserStats>,
}

use crate::analyze::{
    calculate_code_quality_metrics, calculate_contributor_metrics, calculate_github_metrics,
    calculate_jira_metrics, calculate_knowledge_concentration, calculate_trend_metrics,
    calculate_user_stats, generate_chart_data, generate_risk_analysis, DashboardMetrics,
    DataAnalysis, GithubMetrics,
};
use crate::model::{Contributor, GithubCommit, GithubIssue, GithubRepo, PullRequest};
use chrono::{DateTime, Utc};
use tracing::debug;

pub trait Analyzer {
    fn analyze_dashboard(&self, now: DateTime<Utc>) -> DashboardMetrics;
}

impl Analyzer for DataAnalysis {
    fn analyze_dashboard(&self, now: DateTime<Utc>) -> DashboardMetrics {
        let jira = calculate_jira_metrics(self.jira.as_ref());
        debug!(synced = jira.is_some(), "jira metrics");

        let github = self.github_metrics();
        debug!(synced = github.is_some(), "github metrics");

        let dashboard = DashboardMetrics {
            generated_at: now,
            jira,
            github,
            contributors: calculate_contributor_metrics(self.contributors()),
            code_quality: calculate_code_quality_metrics(self.commits(), self.pull_requests()),
            trends: calculate_trend_metrics(self.commits(), self.pull_requests(), now),
            chart: generate_chart_data(self.commits(), self.pull_requests(), now),
            risks: generate_risk_analysis(self.jira.as_ref(), self.pull_requests(), self.issues()),
            knowledge: calculate_knowledge_concentration(self.commits(), self.pull_requests()),
            user_stats: calculate_user_stats(self.commits(), self.pull_requests()),
        };
        debug!(
            trend = %dashboard.trends.productivity_trend,
            bus_factor = dashboard.knowledge.bus_factor,
            severity = %dashboard.knowledge.severity,
            "dashboard analyzed"
        );
        dashboard
    }
}

trait DataAnalysisExtension {
    fn repos(&self) -> &[GithubRepo];
    fn pull_requests(&self) -> &[PullRequest];
    fn issues(&self) -> &[GithubIssue];
    fn commits(&self) -> &[GithubCommit];
    fn contributors(&self) -> &[Contributor];
    fn has_github_data(&self) -> bool;
    fn github_metrics(&self) -> Option<GithubMetrics>;
}

impl DataAnalysisExtension for DataAnalysis {
    fn repos(&self) -> &[GithubRepo] {
        self.repos.as_deref().unwrap_or_default()
    }

    fn pull_requests(&self) -> &[PullRequest] {
        self.pull_requests.as_deref().unwrap_or_default()
    }

    fn issues(&self) -> &[GithubIssue] {
        self.issues.as_deref().unwrap_or_default()
    }

    fn commits(&self) -> &[GithubCommit] {
        self.commits.as_deref().unwrap_or_default()
    }

    fn contributors(&self) -> &[Contributor] {
        self.contributors.as_deref().unwrap_or_default()
    }

    fn has_github_data(&self) -> bool {
        self.repos.is_some()
            || self.pull_requests.is_some()
            || self.issues.is_some()
            || self.commits.is_some()
    }

    /// `None` when no GitHub collection was synced, zeroed when synced but empty.
    fn github_metrics(&self) -> Option<GithubMetrics> {
        if !self.has_github_data() {
            return None;
        }
        Some(calculate_github_metrics(
            self.repos(),
            self.pull_requests(),
            self.issues(),
            self.commits(),
        ))
    }
}

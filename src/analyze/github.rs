use crate::analyze::{average, percent, saturating_sum, GithubMetrics};
use crate::model::{GithubCommit, GithubIssue, GithubRepo, PullRequest, State};

pub fn calculate_github_metrics(
    repos: &[GithubRepo],
    pull_requests: &[PullRequest],
    issues: &[GithubIssue],
    commits: &[GithubCommit],
) -> GithubMetrics {
    let total_prs = pull_requests.len();
    let total_issues = issues.len();
    let merged_prs = pull_requests.iter().filter(|pr| pr.is_merged()).count();
    let closed_issues = issues.iter().filter(|i| i.has_state(&State::Closed)).count();

    let total_additions = saturating_sum(pull_requests.iter().map(|pr| pr.additions.unwrap_or(0)));
    let total_deletions = saturating_sum(pull_requests.iter().map(|pr| pr.deletions.unwrap_or(0)));

    GithubMetrics {
        total_repos: repos.len(),
        total_commits: commits.len(),
        total_prs,
        total_issues,
        merged_prs,
        open_prs: pull_requests.iter().filter(|pr| pr.is_open()).count(),
        open_issues: issues.iter().filter(|i| i.has_state(&State::Open)).count(),
        closed_issues,
        total_additions,
        total_deletions,
        net_changes: net_changes(total_additions, total_deletions),
        avg_commits_per_pr: average(commits.len() as u64, total_prs, 2),
        delivery_rate: percent(merged_prs, total_prs),
        issue_resolution_rate: percent(closed_issues, total_issues),
    }
}

/// `additions - deletions`, clamped to the `i64` range.
fn net_changes(additions: u64, deletions: u64) -> i64 {
    let net = i128::from(additions) - i128::from(deletions);
    i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
}

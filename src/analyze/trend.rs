use crate::analyze::{ProductivityTrend, TrendMetrics};
use crate::model::{GithubCommit, PullRequest};
use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Counts recent activity in 30 and 7 day windows ending at `now`.
pub fn calculate_trend_metrics(
    commits: &[GithubCommit],
    pull_requests: &[PullRequest],
    now: DateTime<Utc>,
) -> TrendMetrics {
    let since_30 = now - Duration::days(30);
    let since_7 = now - Duration::days(7);
    let commit_dates = commits.iter().map(|c| c.committed_date).collect::<Vec<_>>();
    let pull_request_dates = pull_requests.iter().map(|pr| pr.created_at).collect::<Vec<_>>();

    let commits_last_7 = count_since(&commit_dates, &since_7);
    TrendMetrics {
        commits_last_30: count_since(&commit_dates, &since_30),
        prs_last_30: count_since(&pull_request_dates, &since_30),
        commits_last_7,
        prs_last_7: count_since(&pull_request_dates, &since_7),
        productivity_trend: if commits_last_7 > 0 {
            ProductivityTrend::Up
        } else {
            ProductivityTrend::Stable
        },
    }
}

fn count_since(dates: &[Option<DateTime<FixedOffset>>], since: &DateTime<Utc>) -> usize {
    dates
        .iter()
        .flatten()
        .filter(|datetime| *datetime >= since)
        .count()
}

use chrono::{TimeZone, Utc};
use delivery_metrics::analyze::analyzer::Analyzer;
use delivery_metrics::analyze::DataAnalysis;
use delivery_metrics::model::{
    load_optional, Contributor, Error, GithubCommit, GithubIssue, GithubRepo, JiraSync,
    PullRequest,
};
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_a_full_sync() {
    let dir = tempfile::tempdir().unwrap();
    let jira = write(
        dir.path(),
        "jira.json",
        r#"{
            "synced_at": "2024-06-01T06:00:00Z",
            "jira_payload": {
                "assigned_issues": [
                    {"issue_key": "OPS-1", "status": "Done", "priority": "Highest"},
                    {"issue_key": "OPS-2", "status": "In Progress", "priority": "High"},
                    {"issue_key": "OPS-3", "status": "To Do"}
                ],
                "boards": [{"id": 3, "name": "Ops"}]
            }
        }"#,
    );
    let repos = write(dir.path(), "repos.json", r#"[{"name": "api"}, {"name": "web"}]"#);
    let pulls = write(
        dir.path(),
        "pull_requests.json",
        r#"[
            {"state": "closed", "merged_at": "2024-06-03T10:00:00Z", "created_at": "2024-06-01T10:00:00Z",
             "additions": 120, "deletions": 20, "changed_files": 4, "comments": 2},
            {"state": "open", "created_at": "2024-06-10T10:00:00Z", "additions": 5}
        ]"#,
    );
    let issues = write(dir.path(), "issues.json", r#"[{"state": "open"}, {"state": "closed"}]"#);
    let commits = write(
        dir.path(),
        "commits.json",
        r#"[{"author": "ada", "message": "Add health check", "committed_date": "2024-06-11T08:00:00Z"}]"#,
    );
    let contributors = write(
        dir.path(),
        "contributors.json",
        r#"[{"login": "ada", "contributions": 30}, {"login": "lin", "contributions": 12}]"#,
    );

    let data = DataAnalysis {
        jira: Some(JiraSync::from_config(&jira).unwrap()),
        repos: Some(GithubRepo::from_config(&repos).unwrap()),
        pull_requests: Some(PullRequest::from_config(&pulls).unwrap()),
        issues: Some(GithubIssue::from_config(&issues).unwrap()),
        commits: Some(GithubCommit::from_config(&commits).unwrap()),
        contributors: Some(Contributor::from_config(&contributors).unwrap()),
    };
    let now = Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap();
    let dashboard = data.analyze_dashboard(now);

    let jira = dashboard.jira.unwrap();
    assert_eq!(jira.total_issues, 3);
    assert_eq!(jira.high_priority, 2);
    assert_eq!(jira.total_boards, 1);
    assert_eq!(jira.synced_at.as_deref(), Some("2024-06-01T06:00:00Z"));

    let github = dashboard.github.unwrap();
    assert_eq!(github.total_repos, 2);
    assert_eq!(github.merged_prs, 1);
    assert_eq!(github.net_changes, 105);
    assert_eq!(github.delivery_rate, 50.0);
    assert_eq!(github.issue_resolution_rate, 50.0);

    assert_eq!(dashboard.contributors.avg_contributions, 21.0);
    assert_eq!(dashboard.code_quality.avg_files_changed, 2.0);
    assert_eq!(dashboard.trends.prs_last_7, 1);
    assert_eq!(dashboard.chart[5].delivery, 50.0);
    assert_eq!(dashboard.risks[0].score, 40);
}

#[test]
fn wrong_top_level_shape_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "pull_requests.json", r#"{"state": "open"}"#);
    match PullRequest::from_config(&path) {
        Err(Error::Format { path: failed, reason }) => {
            assert_eq!(failed, path);
            assert!(reason.contains("pull requests"));
        }
        other => panic!("expected a format error, got {other:?}"),
    }

    let path = write(dir.path(), "jira.json", "[]");
    assert!(matches!(JiraSync::from_config(&path), Err(Error::Format { .. })));
}

#[test]
fn missing_snapshot_is_not_synced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("issues.json");
    let loaded = load_optional(&path, |p| GithubIssue::from_config(p)).unwrap();
    assert!(loaded.is_none());

    let path = write(dir.path(), "issues.json", "[]");
    let loaded = load_optional(&path, |p| GithubIssue::from_config(p)).unwrap();
    assert_eq!(loaded, Some(vec![]));
}

#[test]
fn merge_timestamps_count_in_any_format() {
    let dir = tempfile::tempdir().unwrap();
    let pulls = write(
        dir.path(),
        "pull_requests.json",
        r#"[
            {"state": "closed", "user": {"login": "ada"}, "merged_at": "2024-01-10T12:00:00.000+0000"},
            {"state": "closed", "user": {"login": "ada"}, "merged_at": "2024-01-10 12:00:00+00"},
            {"state": "closed", "user": {"login": "lin"}, "merged_at": "2024-01-10T12:00:00Z"}
        ]"#,
    );

    let mut data = DataAnalysis::new();
    data.insert_pull_requests(PullRequest::from_config(&pulls).unwrap());
    let now = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let dashboard = data.analyze_dashboard(now);

    let github = dashboard.github.unwrap();
    assert_eq!(github.merged_prs, 3);
    assert_eq!(github.delivery_rate, 100.0);
    let merged = dashboard
        .user_stats
        .iter()
        .map(|s| (s.user.as_str(), s.prs_merged))
        .collect::<Vec<_>>();
    assert_eq!(merged, vec![("ada", 2), ("lin", 1)]);
}

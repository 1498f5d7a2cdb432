use chrono::{TimeZone, Utc};
use delivery_metrics::analyze::{
    calculate_contributor_metrics, calculate_github_metrics, calculate_jira_metrics,
    calculate_trend_metrics, generate_chart_data, generate_risk_analysis, Area, ContributorMetrics,
    RiskLevel,
};
use delivery_metrics::model::{
    parse_datetime, GithubCommit, GithubIssue, JiraIssue, JiraPayload, JiraSync, PullRequest,
};

fn jira_sync(issues: Vec<JiraIssue>) -> JiraSync {
    JiraSync::new(JiraPayload {
        assigned_issues: issues,
        ..JiraPayload::default()
    })
}

fn merged_pull_request() -> PullRequest {
    let mut pull_request = PullRequest::new("closed", parse_datetime("2024-05-02T09:00:00Z"));
    pull_request.merged_at = parse_datetime("2024-05-03T09:00:00Z");
    pull_request
}

#[test]
fn ten_issue_sprint() {
    let mut issues = Vec::new();
    issues.extend((0..4).map(|_| JiraIssue::new(Some("Done"), Some("Medium"))));
    issues.extend((0..2).map(|_| JiraIssue::new(Some("In Progress"), Some("High"))));
    issues.push(JiraIssue::new(Some("To Do"), Some("Highest")));
    issues.extend((0..2).map(|_| JiraIssue::new(Some("To Do"), Some("Low"))));
    issues.push(JiraIssue::new(Some("In Review"), None));

    let sync = jira_sync(issues);
    let metrics = calculate_jira_metrics(Some(&sync)).expect("payload present");
    assert_eq!(metrics.total_issues, 10);
    assert_eq!(metrics.done, 4);
    assert_eq!(metrics.in_progress, 2);
    assert_eq!(metrics.to_do, 3);
    assert_eq!(metrics.high_priority, 3);
    assert_eq!(metrics.highest_priority, 1);
    assert!(metrics.in_progress + metrics.to_do + metrics.done <= metrics.total_issues);
}

#[test]
fn missing_jira_is_none() {
    assert!(calculate_jira_metrics(None).is_none());
}

#[test]
fn five_pull_requests_three_merged() {
    let pull_requests = vec![
        merged_pull_request(),
        merged_pull_request(),
        merged_pull_request(),
        PullRequest::new("open", None),
        PullRequest::new("open", None),
    ];
    let metrics = calculate_github_metrics(&[], &pull_requests, &[], &[]);
    assert_eq!(metrics.merged_prs, 3);
    assert_eq!(metrics.open_prs, 2);
    assert_eq!(metrics.delivery_rate, 60.0);
}

#[test]
fn empty_github_is_zeroed() {
    let metrics = calculate_github_metrics(&[], &[], &[], &[]);
    assert_eq!(metrics.total_repos, 0);
    assert_eq!(metrics.total_commits, 0);
    assert_eq!(metrics.total_prs, 0);
    assert_eq!(metrics.total_issues, 0);
    assert_eq!(metrics.net_changes, 0);
    assert_eq!(metrics.avg_commits_per_pr, 0.0);
    assert_eq!(metrics.delivery_rate, 0.0);
    assert_eq!(metrics.issue_resolution_rate, 0.0);
}

#[test]
fn rates_stay_within_percent_range() {
    for merged in 0..=6 {
        for open in 0..=6 {
            let mut pull_requests = (0..merged).map(|_| merged_pull_request()).collect::<Vec<_>>();
            pull_requests.extend((0..open).map(|_| PullRequest::new("open", None)));
            let issues = (0..open)
                .map(|_| GithubIssue::new("open"))
                .chain((0..merged).map(|_| GithubIssue::new("closed")))
                .collect::<Vec<_>>();

            let metrics = calculate_github_metrics(&[], &pull_requests, &issues, &[]);
            assert!((0.0..=100.0).contains(&metrics.delivery_rate));
            assert!((0.0..=100.0).contains(&metrics.issue_resolution_rate));
        }
    }
}

#[test]
fn empty_contributors() {
    assert_eq!(
        calculate_contributor_metrics(&[]),
        ContributorMetrics {
            total_contributors: 0,
            top_contributors: vec![],
            total_contributions: 0,
            avg_contributions: 0.0,
        }
    );
}

#[test]
fn risk_without_jira() {
    let risks = generate_risk_analysis(None, &[], &[]);
    let summary = risks
        .iter()
        .map(|r| (r.area, r.risk, r.score))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            (Area::Backend, RiskLevel::Unknown, 0),
            (Area::Frontend, RiskLevel::Unknown, 0),
            (Area::DevOps, RiskLevel::Unknown, 0),
            (Area::Qa, RiskLevel::Unknown, 0),
        ]
    );
}

#[test]
fn windows_follow_the_injected_clock() {
    let commits = vec![
        GithubCommit::new("ada", "recent", parse_datetime("2024-06-10T00:00:00Z")),
        GithubCommit::new("ada", "older", parse_datetime("2024-05-20T00:00:00Z")),
    ];
    let june = Utc.with_ymd_and_hms(2024, 6, 12, 0, 0, 0).unwrap();
    let july = Utc.with_ymd_and_hms(2024, 7, 5, 0, 0, 0).unwrap();

    let in_june = calculate_trend_metrics(&commits, &[], june);
    assert_eq!((in_june.commits_last_7, in_june.commits_last_30), (1, 2));
    let in_july = calculate_trend_metrics(&commits, &[], july);
    assert_eq!((in_july.commits_last_7, in_july.commits_last_30), (0, 1));

    let chart = generate_chart_data(&commits, &[], june);
    let names = chart.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    assert_eq!((chart[4].commits, chart[5].commits), (1, 1));
    let chart = generate_chart_data(&commits, &[], july);
    assert_eq!(chart[0].name, "Feb");
    assert_eq!(chart[5].commits, 0);
}

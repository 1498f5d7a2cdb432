use crate::analyze::{Area, RiskArea, RiskLevel};
use crate::model::{GithubIssue, IssueStatus, JiraSync, PullRequest, State};

const BACKEND_WEIGHT: usize = 20;
const BACKEND_CAP: usize = 85;
const FRONTEND_WEIGHT: usize = 10;
const FRONTEND_CAP: usize = 50;
const DEVOPS_WEIGHT: usize = 10;
const DEVOPS_CAP: usize = 45;
const QA_WEIGHT: usize = 5;
const QA_CAP: usize = 40;

/// Scores the four delivery areas, always in the order Backend, Frontend, DevOps, QA.
///
/// Without a Jira payload every area is `Unknown` with score 0.
pub fn generate_risk_analysis(
    sync: Option<&JiraSync>,
    pull_requests: &[PullRequest],
    issues: &[GithubIssue],
) -> [RiskArea; 4] {
    let Some(payload) = sync.and_then(JiraSync::payload) else {
        return [Area::Backend, Area::Frontend, Area::DevOps, Area::Qa]
            .map(|area| RiskArea::new(area, RiskLevel::Unknown, 0, "No Jira data available"));
    };

    let jira_issues = &payload.assigned_issues;
    let high_priority = jira_issues.iter().filter(|i| i.is_high_priority()).count();
    let unresolved = jira_issues
        .iter()
        .filter(|i| !i.has_status(&IssueStatus::Done))
        .count();
    let open_prs = pull_requests.iter().filter(|pr| pr.is_open()).count();
    let open_issues = issues.iter().filter(|i| i.has_state(&State::Open)).count();

    let pr_score = open_prs * FRONTEND_WEIGHT;
    let issue_score = open_issues * QA_WEIGHT;

    [
        RiskArea::new(
            Area::Backend,
            if high_priority > 3 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            score(high_priority * BACKEND_WEIGHT, BACKEND_CAP),
            format!("{high_priority} high priority issues requiring attention."),
        ),
        RiskArea::new(
            Area::Frontend,
            if pr_score > FRONTEND_CAP {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            },
            score(pr_score, FRONTEND_CAP),
            format!("{open_prs} open pull requests."),
        ),
        RiskArea::new(
            Area::DevOps,
            if unresolved > 5 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            },
            score(unresolved * DEVOPS_WEIGHT, DEVOPS_CAP),
            format!("{unresolved} unresolved issues in pipeline."),
        ),
        RiskArea::new(
            Area::Qa,
            if issue_score > 30 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            },
            score(issue_score, QA_CAP),
            format!("{open_issues} open issues awaiting resolution."),
        ),
    ]
}

fn score(raw: usize, cap: usize) -> u32 {
    raw.min(cap) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JiraIssue, JiraPayload};

    fn sync_with(issues: Vec<JiraIssue>) -> JiraSync {
        JiraSync::new(JiraPayload {
            assigned_issues: issues,
            ..JiraPayload::default()
        })
    }

    fn areas(risks: &[RiskArea; 4]) -> Vec<Area> {
        risks.iter().map(|r| r.area).collect()
    }

    #[test]
    fn no_jira_is_unknown() {
        let risks = generate_risk_analysis(None, &[PullRequest::new("open", None)], &[]);
        assert_eq!(areas(&risks), vec![Area::Backend, Area::Frontend, Area::DevOps, Area::Qa]);
        assert!(risks.iter().all(|r| r.risk == RiskLevel::Unknown && r.score == 0));
    }

    #[test]
    fn empty_payload_is_calm() {
        let risks = generate_risk_analysis(Some(&sync_with(vec![])), &[], &[]);
        let levels = risks.iter().map(|r| (r.risk, r.score)).collect::<Vec<_>>();
        assert_eq!(
            levels,
            vec![
                (RiskLevel::Medium, 0),
                (RiskLevel::Low, 0),
                (RiskLevel::Low, 0),
                (RiskLevel::Low, 0)
            ]
        );
    }

    #[test]
    fn scores_are_capped() {
        let issues = (0..10)
            .map(|_| JiraIssue::new(Some("In Progress"), Some("Highest")))
            .collect::<Vec<_>>();
        let pull_requests = (0..8).map(|_| PullRequest::new("open", None)).collect::<Vec<_>>();
        let github_issues = (0..12).map(|_| GithubIssue::new("open")).collect::<Vec<_>>();

        let risks = generate_risk_analysis(Some(&sync_with(issues)), &pull_requests, &github_issues);
        assert_eq!((risks[0].risk, risks[0].score), (RiskLevel::High, 85));
        assert_eq!((risks[1].risk, risks[1].score), (RiskLevel::Medium, 50));
        assert_eq!((risks[2].risk, risks[2].score), (RiskLevel::Medium, 45));
        assert_eq!((risks[3].risk, risks[3].score), (RiskLevel::Medium, 40));
        assert!(risks.iter().all(|r| r.score <= 100));
        assert_eq!(risks[1].insight, "8 open pull requests.");
    }

    #[test]
    fn thresholds_are_strict() {
        let mut issues = (0..3)
            .map(|_| JiraIssue::new(Some("Done"), Some("High")))
            .collect::<Vec<_>>();
        issues.extend((0..5).map(|_| JiraIssue::new(None, Some("Low"))));
        let pull_requests = (0..5).map(|_| PullRequest::new("open", None)).collect::<Vec<_>>();
        let github_issues = (0..6).map(|_| GithubIssue::new("open")).collect::<Vec<_>>();

        let risks = generate_risk_analysis(Some(&sync_with(issues)), &pull_requests, &github_issues);
        assert_eq!((risks[0].risk, risks[0].score), (RiskLevel::Medium, 60));
        assert_eq!((risks[1].risk, risks[1].score), (RiskLevel::Low, 50));
        // Issues without a status are unresolved.
        assert_eq!((risks[2].risk, risks[2].score), (RiskLevel::Low, 45));
        assert_eq!((risks[3].risk, risks[3].score), (RiskLevel::Low, 30));
        assert_eq!(risks[2].insight, "5 unresolved issues in pipeline.");
    }
}

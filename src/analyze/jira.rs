use crate::analyze::JiraMetrics;
use crate::model::{IssuePriority, IssueStatus, JiraSync};

/// Summarises a Jira sync. `None` when nothing has been synced yet.
pub fn calculate_jira_metrics(sync: Option<&JiraSync>) -> Option<JiraMetrics> {
    let payload = sync?.payload()?;
    let issues = &payload.assigned_issues;
    let with_status = |status: IssueStatus| issues.iter().filter(|i| i.has_status(&status)).count();

    Some(JiraMetrics {
        total_issues: issues.len(),
        in_progress: with_status(IssueStatus::InProgress),
        to_do: with_status(IssueStatus::ToDo),
        done: with_status(IssueStatus::Done),
        high_priority: issues.iter().filter(|i| i.is_high_priority()).count(),
        highest_priority: issues
            .iter()
            .filter(|i| i.priority == Some(IssuePriority::Highest))
            .count(),
        total_boards: payload.boards.len(),
        synced_at: payload
            .synced_at
            .clone()
            .filter(|synced_at| !synced_at.is_empty())
            .or_else(|| sync.and_then(|s| s.synced_at.clone())),
        boards: payload.boards.clone(),
    })
}

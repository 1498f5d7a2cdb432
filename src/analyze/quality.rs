use crate::analyze::{average, saturating_sum, CodeQualityMetrics};
use crate::model::{GithubCommit, PullRequest};

pub fn calculate_code_quality_metrics(
    commits: &[GithubCommit],
    pull_requests: &[PullRequest],
) -> CodeQualityMetrics {
    let message_chars = saturating_sum(
        commits
            .iter()
            .map(|c| c.message.as_deref().map_or(0, |m| m.chars().count() as u64)),
    );
    let files_changed = saturating_sum(pull_requests.iter().map(|pr| pr.changed_files.unwrap_or(0)));
    let review_comments = saturating_sum(pull_requests.iter().map(|pr| pr.comments.unwrap_or(0)));

    CodeQualityMetrics {
        avg_commit_message_length: average(message_chars, commits.len(), 0) as u64,
        avg_files_changed: average(files_changed, pull_requests.len(), 1),
        avg_review_comments: average(review_comments, pull_requests.len(), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zeroed() {
        assert_eq!(calculate_code_quality_metrics(&[], &[]), CodeQualityMetrics::default());
    }

    #[test]
    fn averages_messages_and_reviews() {
        let commits = vec![
            GithubCommit::new("ada", "Fix", None),
            GithubCommit::new("ada", "Add retry", None),
            GithubCommit {
                author: None,
                message: None,
                committed_date: None,
            },
        ];
        let mut first = PullRequest::new("open", None);
        first.changed_files = Some(3);
        first.comments = Some(4);
        let mut second = PullRequest::new("closed", None);
        second.changed_files = Some(4);

        let metrics = calculate_code_quality_metrics(&commits, &[first, second]);
        // (3 + 9 + 0) / 3
        assert_eq!(metrics.avg_commit_message_length, 4);
        assert_eq!(metrics.avg_files_changed, 3.5);
        assert_eq!(metrics.avg_review_comments, 2.0);
    }
}

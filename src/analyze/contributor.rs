use crate::analyze::{average, saturating_sum, ContributorMetrics};
use crate::model::Contributor;

const TOP_CONTRIBUTORS: usize = 5;

/// Aggregates contributor stats.
///
/// `top_contributors` keeps input order: the contributors endpoint already sorts by
/// contributions, descending.
pub fn calculate_contributor_metrics(contributors: &[Contributor]) -> ContributorMetrics {
    if contributors.is_empty() {
        return ContributorMetrics::default();
    }

    let total_contributions =
        saturating_sum(contributors.iter().map(|c| c.contributions.unwrap_or(0)));

    ContributorMetrics {
        total_contributors: contributors.len(),
        top_contributors: contributors.iter().take(TOP_CONTRIBUTORS).cloned().collect(),
        total_contributions,
        avg_contributions: average(total_contributions, contributors.len(), 2),
    }
}

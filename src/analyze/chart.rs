use crate::analyze::{percent, ChartPoint};
use crate::model::{GithubCommit, PullRequest};
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use indexmap::IndexMap;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const CHART_MONTHS: u32 = 6;

#[derive(Default)]
struct MonthBucket {
    commits: usize,
    created_prs: usize,
    merged_prs: usize,
}

/// Monthly activity for the six calendar months ending with the month of `now`, oldest first.
///
/// `delivery` is the share of pull requests opened that month which have been merged.
/// Without any commits a fixed `Jan..Jun` placeholder is returned.
pub fn generate_chart_data(
    commits: &[GithubCommit],
    pull_requests: &[PullRequest],
    now: DateTime<Utc>,
) -> Vec<ChartPoint> {
    if commits.is_empty() {
        return MONTHS
            .iter()
            .take(CHART_MONTHS as usize)
            .map(|name| ChartPoint {
                name: name.to_string(),
                commits: 0,
                delivery: 0.0,
            })
            .collect();
    }

    let mut buckets: IndexMap<(i32, u32), MonthBucket> = (0..CHART_MONTHS)
        .rev()
        .map(|back| (months_back(&now, back), MonthBucket::default()))
        .collect();

    for date in commits.iter().filter_map(|c| c.committed_date) {
        if let Some(bucket) = buckets.get_mut(&month_key(&date)) {
            bucket.commits += 1;
        }
    }
    for pull_request in pull_requests {
        let Some(created_at) = pull_request.created_at else {
            continue;
        };
        if let Some(bucket) = buckets.get_mut(&month_key(&created_at)) {
            bucket.created_prs += 1;
            if pull_request.is_merged() {
                bucket.merged_prs += 1;
            }
        }
    }

    buckets
        .into_iter()
        .map(|((_, month), bucket)| ChartPoint {
            name: MONTHS[month as usize - 1].to_string(),
            commits: bucket.commits,
            delivery: percent(bucket.merged_prs, bucket.created_prs),
        })
        .collect()
}

/// Calendar month, in UTC.
fn month_key(datetime: &DateTime<FixedOffset>) -> (i32, u32) {
    let utc = datetime.with_timezone(&Utc);
    (utc.year(), utc.month())
}

fn months_back(now: &DateTime<Utc>, back: u32) -> (i32, u32) {
    let index = now.year() * 12 + now.month0() as i32 - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

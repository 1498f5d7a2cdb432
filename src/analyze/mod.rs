pub mod analyzer;
mod chart;
mod contributor;
mod github;
mod jira;
mod knowledge;
mod model;
mod quality;
mod risk;
mod trend;

pub use chart::generate_chart_data;
pub use contributor::calculate_contributor_metrics;
pub use github::calculate_github_metrics;
pub use jira::calculate_jira_metrics;
pub use knowledge::{calculate_knowledge_concentration, calculate_user_stats};
pub use model::*;
pub use quality::calculate_code_quality_metrics;
pub use risk::generate_risk_analysis;
pub use trend::calculate_trend_metrics;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / total` as a percentage with one decimal, 0 when `total` is 0.
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64 * 100.0, 1)
}

/// Sum that stops at `u64::MAX` instead of overflowing.
fn saturating_sum(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(0, u64::saturating_add)
}

/// Mean rounded to `decimals`, 0 when `count` is 0.
fn average(sum: u64, count: usize, decimals: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(sum as f64 / count as f64, decimals)
}

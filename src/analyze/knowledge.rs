use crate::analyze::{round_to, KnowledgeConcentration, PersonKnowledge, Severity, UserStats};
use crate::model::{GithubCommit, PullRequest};
use indexmap::IndexMap;
use std::cmp::Reverse;

const UNKNOWN_AUTHOR: &str = "unknown";
const COMMIT_WEIGHT: f64 = 1.0;
const PULL_REQUEST_WEIGHT: f64 = 1.5;
const BUS_FACTOR_SHARE: f64 = 0.10;
const EVIDENCE_PEOPLE: usize = 5;
const SEVERE_RISK: f64 = 60.0;
const MODERATE_RISK: f64 = 30.0;

#[derive(Debug, Default)]
struct Signals {
    score: f64,
    commits: usize,
    pull_requests: usize,
}

fn author(author: &Option<String>) -> &str {
    author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
}

/// Weighs commits (1.0) and opened pull requests (1.5) per person and scores
/// how much of the repository depends on its top contributors.
pub fn calculate_knowledge_concentration(
    commits: &[GithubCommit],
    pull_requests: &[PullRequest],
) -> KnowledgeConcentration {
    let mut signals: IndexMap<&str, Signals> = IndexMap::new();
    for commit in commits {
        let person = signals.entry(author(&commit.author)).or_default();
        person.score += COMMIT_WEIGHT;
        person.commits += 1;
    }
    for pull_request in pull_requests {
        let person = signals.entry(author(&pull_request.author)).or_default();
        person.score += PULL_REQUEST_WEIGHT;
        person.pull_requests += 1;
    }

    let total_score = signals.values().map(|s| s.score).sum::<f64>();
    if signals.is_empty() || total_score <= 0.0 {
        return KnowledgeConcentration {
            insight: "No activity detected.".to_string(),
            ..KnowledgeConcentration::default()
        };
    }

    let mut ranked = signals.into_iter().collect::<Vec<_>>();
    // Stable, ties keep first-seen order.
    ranked.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));

    let shares = ranked
        .iter()
        .map(|(_, s)| s.score / total_score)
        .collect::<Vec<_>>();
    let top1_share = shares.first().copied().unwrap_or(0.0);
    let top2_share = shares.get(1).copied().unwrap_or(0.0);
    let bus_factor = shares.iter().filter(|share| **share >= BUS_FACTOR_SHARE).count();

    // Whole repository is one module, so criticality is always full.
    let silo = ((top1_share - 0.4) / 0.6).max(0.0);
    let bus = ((2.0 - bus_factor as f64) / 2.0).max(0.0);
    let criticality = 1.0;
    let raw_risk = 100.0 * (0.6 * silo + 0.25 * bus + 0.15 * criticality);
    let risk_index = round_to(raw_risk.min(100.0), 2);

    let people = ranked
        .iter()
        .zip(&shares)
        .map(|((person, s), share)| PersonKnowledge {
            person: person.to_string(),
            knowledge_score: s.score,
            share_pct: round_to(share * 100.0, 1),
            commits: s.commits,
            pull_requests: s.pull_requests,
        })
        .collect::<Vec<_>>();

    let evidence = people.iter().take(EVIDENCE_PEOPLE).map(evidence_line).collect();
    let insight = insight(&people[0], bus_factor);

    KnowledgeConcentration {
        risk_index,
        severity: severity(risk_index),
        top1_share_pct: round_to(top1_share * 100.0, 1),
        top2_share_pct: round_to(top2_share * 100.0, 1),
        bus_factor,
        total_knowledge_weight: total_score,
        signals_count: commits.len() + pull_requests.len(),
        people,
        evidence,
        insight,
    }
}

fn severity(risk_index: f64) -> Severity {
    if risk_index >= SEVERE_RISK {
        Severity::Severe
    } else if risk_index >= MODERATE_RISK {
        Severity::Moderate
    } else {
        Severity::Healthy
    }
}

fn evidence_line(person: &PersonKnowledge) -> String {
    let mut counts = vec![format!("commits={}", person.commits)];
    if person.pull_requests > 0 {
        counts.push(format!("pull_requests={}", person.pull_requests));
    }
    format!("{}: share {:.1}% | {}", person.person, person.share_pct, counts.join(", "))
}

fn insight(top: &PersonKnowledge, bus_factor: usize) -> String {
    if bus_factor == 1 {
        format!(
            "CRITICAL: {} is a single point of failure (bus factor 1). If they leave, {:.1}% of the knowledge is orphaned.",
            top.person, top.share_pct
        )
    } else if top.share_pct > 50.0 {
        format!("HIGH RISK: {} dominates ({:.1}%).", top.person, top.share_pct)
    } else {
        "Healthy distribution.".to_string()
    }
}

/// Commits, opened and merged pull requests per author, most commits first.
pub fn calculate_user_stats(
    commits: &[GithubCommit],
    pull_requests: &[PullRequest],
) -> Vec<UserStats> {
    let mut stats: IndexMap<&str, UserStats> = IndexMap::new();
    for commit in commits {
        let user = author(&commit.author);
        stats.entry(user).or_insert_with(|| UserStats::new(user)).commits += 1;
    }
    for pull_request in pull_requests {
        let user = author(&pull_request.author);
        let entry = stats.entry(user).or_insert_with(|| UserStats::new(user));
        entry.prs_opened += 1;
        if pull_request.has_merge() {
            entry.prs_merged += 1;
        }
    }

    let mut stats = stats.into_values().collect::<Vec<_>>();
    stats.sort_by_key(|s| Reverse(s.commits));
    stats
}

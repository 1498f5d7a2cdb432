use crate::analyze::{
    ChartPoint, CodeQualityMetrics, ContributorMetrics, DashboardMetrics, GithubMetrics,
    JiraMetrics, KnowledgeConcentration, RiskArea, TrendMetrics, UserStats,
};
use crate::model::{Error, Result};
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

pub trait MarkdownReport {
    fn report_markdown(&self) -> Result<String>;
}

impl MarkdownReport for DashboardMetrics {
    fn report_markdown(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1("Engineering delivery");
        doc.paragraph(format!(
            "Generated at {}",
            self.generated_at.format("%d.%m.%Y %H:%M UTC")
        ));
        doc.add_jira(self.jira.as_ref())?;
        doc.add_github(self.github.as_ref())?;
        doc.add_contributors(&self.contributors)?;
        doc.add_code_quality(&self.code_quality)?;
        doc.add_trends(&self.trends)?;
        doc.add_chart(&self.chart)?;
        doc.add_risks(&self.risks)?;
        doc.add_knowledge(&self.knowledge)?;
        doc.add_user_stats(&self.user_stats)?;

        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_jira(&mut self, jira: Option<&JiraMetrics>) -> Result<()>;
    fn add_github(&mut self, github: Option<&GithubMetrics>) -> Result<()>;
    fn add_contributors(&mut self, contributors: &ContributorMetrics) -> Result<()>;
    fn add_code_quality(&mut self, quality: &CodeQualityMetrics) -> Result<()>;
    fn add_trends(&mut self, trends: &TrendMetrics) -> Result<()>;
    fn add_chart(&mut self, chart: &[ChartPoint]) -> Result<()>;
    fn add_risks(&mut self, risks: &[RiskArea]) -> Result<()>;
    fn add_knowledge(&mut self, knowledge: &KnowledgeConcentration) -> Result<()>;
    fn add_user_stats(&mut self, user_stats: &[UserStats]) -> Result<()>;
    fn add_table(&mut self, name: &str, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_jira(&mut self, jira: Option<&JiraMetrics>) -> Result<()> {
        self.header2("Jira".to_string());
        let Some(jira) = jira else {
            self.paragraph("No Jira data synced yet.".to_string());
            return Ok(());
        };

        let rows = vec![
            metric("Issues", jira.total_issues),
            metric("To Do", jira.to_do),
            metric("In Progress", jira.in_progress),
            metric("Done", jira.done),
            metric("High priority", jira.high_priority),
            metric("Highest priority", jira.highest_priority),
            metric("Boards", jira.total_boards),
            metric("Synced at", jira.synced_at.as_deref().unwrap_or("-")),
        ];
        self.add_table("jira", &["Metric", "Value"], rows)?;

        if !jira.boards.is_empty() {
            let rows = jira
                .boards
                .iter()
                .map(|board| {
                    vec![
                        board.id.clone().unwrap_or_default(),
                        board.name.clone().unwrap_or_default(),
                        board.board_type.clone().unwrap_or_default(),
                    ]
                })
                .collect::<Vec<_>>();
            self.add_table("boards", &["Id", "Board", "Type"], rows)?;
        }
        Ok(())
    }

    fn add_github(&mut self, github: Option<&GithubMetrics>) -> Result<()> {
        self.header2("GitHub".to_string());
        let Some(github) = github else {
            self.paragraph("No GitHub data synced yet.".to_string());
            return Ok(());
        };

        let rows = vec![
            metric("Repositories", github.total_repos),
            metric("Commits", github.total_commits),
            metric("Pull requests", github.total_prs),
            metric("Merged / open PRs", format!("{} / {}", github.merged_prs, github.open_prs)),
            metric("Issues", github.total_issues),
            metric(
                "Open / closed issues",
                format!("{} / {}", github.open_issues, github.closed_issues),
            ),
            metric(
                "Code changes",
                format!(
                    "**{}** (*+ {}* / *- {}*)",
                    github.net_changes, github.total_additions, github.total_deletions
                ),
            ),
            metric("Commits per PR", github.avg_commits_per_pr),
            metric("Delivery rate", format!("{}%", github.delivery_rate)),
            metric("Issue resolution rate", format!("{}%", github.issue_resolution_rate)),
        ];
        self.add_table("github", &["Metric", "Value"], rows)?;
        Ok(())
    }

    fn add_contributors(&mut self, contributors: &ContributorMetrics) -> Result<()> {
        self.header2("Contributors".to_string());
        self.paragraph(format!(
            "{} contributors, {} contributions ({} on average)",
            contributors.total_contributors,
            contributors.total_contributions,
            contributors.avg_contributions
        ));
        if contributors.top_contributors.is_empty() {
            return Ok(());
        }

        let rows = contributors
            .top_contributors
            .iter()
            .map(|c| {
                vec![
                    c.login.clone().unwrap_or_else(|| "-".to_string()),
                    c.contributions.unwrap_or(0).to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table("contributors", &["Contributor", "Contributions"], rows)?;
        Ok(())
    }

    fn add_code_quality(&mut self, quality: &CodeQualityMetrics) -> Result<()> {
        self.header2("Code quality".to_string());
        let rows = vec![
            metric("Commit message length", quality.avg_commit_message_length),
            metric("Files changed per PR", quality.avg_files_changed),
            metric("Review comments per PR", quality.avg_review_comments),
        ];
        self.add_table("code quality", &["Average", "Value"], rows)?;
        Ok(())
    }

    fn add_trends(&mut self, trends: &TrendMetrics) -> Result<()> {
        self.header2("Trends".to_string());
        let rows = vec![
            vec![
                "Commits".to_string(),
                trends.commits_last_7.to_string(),
                trends.commits_last_30.to_string(),
            ],
            vec![
                "Pull requests".to_string(),
                trends.prs_last_7.to_string(),
                trends.prs_last_30.to_string(),
            ],
        ];
        self.add_table("trends", &["", "Last 7 days", "Last 30 days"], rows)?;
        self.paragraph(format!("Productivity trend: **{}**", trends.productivity_trend));
        Ok(())
    }

    fn add_chart(&mut self, chart: &[ChartPoint]) -> Result<()> {
        self.header2("Monthly activity".to_string());
        let headings = [vec![String::new()], chart.iter().map(|p| p.name.clone()).collect()].concat();

        let row = chart.iter().map(|p| p.commits.to_string()).collect::<Vec<_>>();
        let commits = [vec!["Commits".to_string()], row].concat();
        let row = chart.iter().map(|p| format!("{}%", p.delivery)).collect::<Vec<_>>();
        let delivery = [vec!["Delivery".to_string()], row].concat();

        let headings = headings.iter().map(String::as_str).collect::<Vec<_>>();
        self.add_table("monthly activity", &headings, vec![commits, delivery])?;
        Ok(())
    }

    fn add_risks(&mut self, risks: &[RiskArea]) -> Result<()> {
        self.header2("Risk".to_string());
        let rows = risks
            .iter()
            .map(|r| {
                vec![
                    format!("**{}**", r.area),
                    r.risk.to_string(),
                    r.score.to_string(),
                    r.insight.clone(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table("risk", &["Area", "Risk", "Score", "Insight"], rows)?;

        let elevated = risks
            .iter()
            .filter(|r| r.score >= 40)
            .map(|r| r.area.to_string())
            .join(", ");
        if !elevated.is_empty() {
            self.paragraph(format!("Needs attention: {elevated}"));
        }
        Ok(())
    }

    fn add_knowledge(&mut self, knowledge: &KnowledgeConcentration) -> Result<()> {
        self.header2("Knowledge concentration".to_string());
        self.paragraph(knowledge.insight.clone());
        if knowledge.people.is_empty() {
            return Ok(());
        }

        let rows = vec![
            metric("Risk index", knowledge.risk_index),
            metric("Severity", knowledge.severity),
            metric("Bus factor", knowledge.bus_factor),
            metric("Top share", format!("{}%", knowledge.top1_share_pct)),
            metric("Second share", format!("{}%", knowledge.top2_share_pct)),
            metric("Signals", knowledge.signals_count),
        ];
        self.add_table("knowledge", &["Metric", "Value"], rows)?;

        let rows = knowledge
            .people
            .iter()
            .map(|p| {
                vec![
                    p.person.clone(),
                    format!("{}%", p.share_pct),
                    p.commits.to_string(),
                    p.pull_requests.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table("knowledge share", &["Person", "Share", "Commits", "Pull requests"], rows)
    }

    fn add_user_stats(&mut self, user_stats: &[UserStats]) -> Result<()> {
        self.header2("Per-user activity".to_string());
        if user_stats.is_empty() {
            self.paragraph("No commits or pull requests synced yet.".to_string());
            return Ok(());
        }

        let rows = user_stats
            .iter()
            .map(|s| {
                vec![
                    s.user.clone(),
                    s.commits.to_string(),
                    s.prs_opened.to_string(),
                    s.prs_merged.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table("per-user", &["User", "Commits", "PRs opened", "PRs merged"], rows)
    }

    /// Tables bypass `paragraph`, which wraps long lines.
    fn add_table(&mut self, name: &str, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        self.elements.push(Box::new(table(name, headings, rows)?));
        Ok(())
    }
}

fn metric(name: &str, value: impl ToString) -> Vec<String> {
    vec![name.to_string(), value.to_string()]
}

fn table(name: &str, headings: &[&str], rows: Vec<Vec<String>>) -> Result<String> {
    let headings = headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            let alignment = if index == 0 {
                None
            } else {
                Some(HeadingAlignment::Center)
            };
            Heading::new(heading.to_string(), alignment)
        })
        .collect::<Vec<_>>();

    let mut md_table = MarkdownTable::new(rows);
    md_table.with_headings(headings);
    md_table
        .as_markdown()
        .map_err(|_| Error::Report(format!("cannot render the {name} table")))
}

mod utils;

use crate::utils::MultiProgressNew;
use chrono::{DateTime, FixedOffset, Utc};
use clap::{ArgAction, Parser};
use delivery_metrics::analyze::analyzer::Analyzer;
use delivery_metrics::analyze::DataAnalysis;
use delivery_metrics::git::{open_repository, LocalCommits};
use delivery_metrics::model::{
    load_optional, parse_datetime, Contributor, GithubCommit, GithubIssue, GithubRepo, JiraSync,
    PullRequest, Result,
};
use delivery_metrics::report::ReportFormat;
use indicatif::{MultiProgress, ProgressBar};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(about = "Engineering-delivery dashboard metrics from Jira and GitHub snapshots")]
struct Args {
    #[arg(long = "jira", default_value = "jira.json")]
    jira_path: PathBuf,
    #[arg(long = "repos", default_value = "repos.json")]
    repos_path: PathBuf,
    #[arg(long = "pulls", default_value = "pull_requests.json")]
    pulls_path: PathBuf,
    #[arg(long = "issues", default_value = "issues.json")]
    issues_path: PathBuf,
    #[arg(long = "commits", default_value = "commits.json")]
    commits_path: PathBuf,
    #[arg(long = "contributors", default_value = "contributors.json")]
    contributors_path: PathBuf,
    /// Read commits from a local repository instead of `--commits`
    #[arg(long = "git_repo")]
    git_repo: Option<PathBuf>,
    /// Oldest local commit to read (RFC 3339)
    #[arg(long = "since", value_parser = parse_datetime_arg)]
    since: Option<DateTime<FixedOffset>>,
    /// Time the trend and chart windows end at, defaults to the current time
    #[arg(long = "now", value_parser = parse_datetime_arg)]
    now: Option<DateTime<FixedOffset>>,
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,
    #[arg(long = "output")]
    output: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(args: &Args) -> Result<()> {
    let data_analysis = load_snapshots(args).await?;

    let now = args
        .now
        .map_or_else(Utc::now, |now| now.with_timezone(&Utc));
    let dashboard = data_analysis.analyze_dashboard(now);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(args.format.default_output()));
    fs::write(&output, args.format.render(&dashboard)?)?;
    info!(path = %output.display(), format = ?args.format, "report written");
    Ok(())
}

async fn load_snapshots(args: &Args) -> Result<DataAnalysis> {
    let multi_progress = MultiProgress::new();
    let (jira, repos, pull_requests, issues, commits, contributors) = futures::join!(
        load_snapshot(
            &args.jira_path,
            multi_progress.add_snapshot("jira"),
            |path| JiraSync::from_config(path),
            |sync: &JiraSync| sync.payload().map_or(0, |p| p.assigned_issues.len()),
        ),
        load_snapshot(
            &args.repos_path,
            multi_progress.add_snapshot("repositories"),
            |path| GithubRepo::from_config(path),
            Vec::len,
        ),
        load_snapshot(
            &args.pulls_path,
            multi_progress.add_snapshot("pull requests"),
            |path| PullRequest::from_config(path),
            Vec::len,
        ),
        load_snapshot(
            &args.issues_path,
            multi_progress.add_snapshot("issues"),
            |path| GithubIssue::from_config(path),
            Vec::len,
        ),
        load_commits(args, multi_progress.add_snapshot("commits")),
        load_snapshot(
            &args.contributors_path,
            multi_progress.add_snapshot("contributors"),
            |path| Contributor::from_config(path),
            Vec::len,
        ),
    );

    Ok(DataAnalysis {
        jira: jira?,
        repos: repos?,
        pull_requests: pull_requests?,
        issues: issues?,
        commits: commits?,
        contributors: contributors?,
    })
}

async fn load_snapshot<T, F>(
    path: &Path,
    pb: ProgressBar,
    loader: F,
    count: fn(&T) -> usize,
) -> Result<Option<T>>
where
    F: FnOnce(&Path) -> Result<T>,
{
    pb.set_message(format!("Read file `{}` ...", path.display()));
    let loaded = load_optional(path, loader);
    match &loaded {
        Ok(Some(snapshot)) => pb.finish_with_message(format!(
            "✅ Completed parsing file `{}` (find {} elements)",
            path.display(),
            count(snapshot)
        )),
        Ok(None) => pb.finish_with_message(format!("Not synced, `{}` not found", path.display())),
        Err(_) => pb.abandon_with_message(format!("❌ Failed parsing file `{}`", path.display())),
    }
    loaded
}

async fn load_commits(args: &Args, pb: ProgressBar) -> Result<Option<Vec<GithubCommit>>> {
    let Some(repo_path) = &args.git_repo else {
        return load_snapshot(
            &args.commits_path,
            pb,
            |path| GithubCommit::from_config(path),
            Vec::len,
        )
        .await;
    };

    pb.set_message("Read git history ...");
    let commits = open_repository(repo_path)
        .and_then(|repo| repo.local_commits(args.since.as_ref()));
    match &commits {
        Ok(commits) => pb.finish_with_message(format!(
            "✅ Completed read git history (find {} commits)",
            commits.len()
        )),
        Err(_) => pb.abandon_with_message(format!(
            "❌ Failed reading git history `{}`",
            repo_path.display()
        )),
    }
    commits.map(Some)
}

fn parse_datetime_arg(raw: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    parse_datetime(raw).ok_or_else(|| delivery_metrics::Error::Date(raw.to_string()).to_string())
}

use crate::model::{GithubCommit, Result};
use chrono::{DateTime, FixedOffset};
use git2::{Repository, Time};
use std::path::Path;
use tracing::{debug, info};

pub fn open_repository(path: &Path) -> Result<Repository> {
    let repo = Repository::open(path)?;
    debug!(path = %path.display(), "opened git repository");
    Ok(repo)
}

pub trait LocalCommits {
    /// Commits reachable from `HEAD`, newest first, at or after `since` when given.
    fn local_commits(&self, since: Option<&DateTime<FixedOffset>>) -> Result<Vec<GithubCommit>>;
}

impl LocalCommits for Repository {
    fn local_commits(&self, since: Option<&DateTime<FixedOffset>>) -> Result<Vec<GithubCommit>> {
        if self.is_empty()? {
            debug!("repository has no commits yet");
            return Ok(Vec::new());
        }

        let mut revwalk = self.revwalk()?;
        revwalk.push_head()?;
        let mut commits = Vec::new();
        for id in revwalk {
            let git_commit = self.find_commit(id?)?;
            let commit = git_commit_to_commit(&git_commit);
            let in_range = match (since, &commit.committed_date) {
                (Some(since), Some(datetime)) => datetime >= since,
                _ => true,
            };
            if in_range {
                commits.push(commit);
            }
        }
        info!(count = commits.len(), "read local git history");
        Ok(commits)
    }
}

fn git_commit_to_commit(git_commit: &git2::Commit<'_>) -> GithubCommit {
    let author = git_commit.author();
    let name = author.name().or_else(|| author.email()).unwrap_or("");
    GithubCommit::new(
        name,
        git_commit.message().unwrap_or("").trim_end(),
        git_time_to_datetime(&git_commit.time()),
    )
}

fn git_time_to_datetime(time: &Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)?;
    DateTime::from_timestamp(time.seconds(), 0).map(|utc| utc.with_timezone(&offset))
}

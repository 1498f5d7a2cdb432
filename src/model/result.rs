use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading snapshots, reading git history or writing reports.
///
/// The calculators themselves never fail; missing data is a valid input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A snapshot file exists but its content has the wrong shape.
    #[error("invalid snapshot `{}`: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("not a valid date time: {0}")]
    Date(String),

    #[error("report error: {0}")]
    Report(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_names_the_file() {
        let err = Error::Format {
            path: PathBuf::from("snapshots/pull_requests.json"),
            reason: "expected a JSON array".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("snapshots/pull_requests.json"));
        assert!(message.contains("expected a JSON array"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}

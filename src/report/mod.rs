pub mod json;
pub mod markdown;

use crate::analyze::DashboardMetrics;
use crate::model::Result;
use clap::ValueEnum;
use self::json::JsonReport;
use self::markdown::MarkdownReport;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn default_output(&self) -> &'static str {
        match self {
            Self::Markdown => "dashboard.md",
            Self::Json => "dashboard.json",
        }
    }

    pub fn render(&self, dashboard: &DashboardMetrics) -> Result<String> {
        match self {
            Self::Markdown => dashboard.report_markdown(),
            Self::Json => dashboard.report_json(),
        }
    }
}

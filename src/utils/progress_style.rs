use indicatif::ProgressStyle;

const SNAPSHOT_TEMPLATE: &str = "{spinner} {prefix:14} {wide_msg}";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    /// Spinner with a fixed-width source label.
    pub fn snapshot() -> ProgressStyle {
        ProgressStyle::with_template(SNAPSHOT_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

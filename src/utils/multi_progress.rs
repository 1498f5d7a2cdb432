use crate::utils::ProgressStyleTemplate;
use indicatif::{MultiProgress, ProgressBar};
use std::time::Duration;

pub trait MultiProgressNew {
    fn add_snapshot(&self, label: &'static str) -> ProgressBar;
}

impl MultiProgressNew for MultiProgress {
    fn add_snapshot(&self, label: &'static str) -> ProgressBar {
        let pb = self.add(ProgressBar::new_spinner());
        pb.set_style(ProgressStyleTemplate::snapshot());
        pb.set_prefix(label);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

//! Engineering-delivery metrics derived from synced Jira and GitHub records.
//!
//! Raw snapshots are loaded into [`model`] records, summarised by the pure
//! calculators in [`analyze`], and rendered by [`report`].

pub mod analyze;
pub mod git;
pub mod model;
pub mod report;

pub use model::{Error, Result};

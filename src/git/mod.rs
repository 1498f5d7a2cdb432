pub mod commit;

pub use commit::open_repository;
pub use commit::LocalCommits;

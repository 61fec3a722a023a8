pub mod config;
pub mod github;
pub mod kanban;
pub mod mock_github;
pub mod sync;

// Re-export the types making up the parse-then-sync pipeline at crate root
pub use config::Config;
pub use github::{GitHubClient, GitHubIssue, RealGitHubClient, RepoId};
pub use kanban::{IssueRecord, SYNC_MARKER_LABEL, parse_kanban};
pub use sync::{SyncSummary, sync_issues};

//! One-way reconciliation of parsed kanban records against GitHub.
//!
//! The baseline is the set of titles of all issues (any state) carrying the
//! sync-marker label. Records whose composed title is already in the baseline
//! are skipped; everything else is created, one blocking call at a time, in
//! document order. Existing issues are never updated - re-running after
//! editing an already-synced entry's body does not push the edit.

use std::collections::HashSet;

use color_eyre::eyre::Result;
use tracing::{info, warn};

use crate::{
	github::{GitHubClient, RepoId},
	kanban::{IssueRecord, SYNC_MARKER_LABEL},
};

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SyncSummary {
	pub created: usize,
	pub skipped: usize,
	pub total: usize,
}

/// Sync `records` into `repo`, creating whatever the baseline is missing.
///
/// A baseline fetch failure aborts the run. A per-record create failure is
/// logged and the loop continues; the failed record counts toward neither
/// `created` nor `skipped`.
///
/// The baseline is not extended with titles created during the run, so two
/// records sharing a composed title will both attempt creation. Known
/// behavior, kept as-is.
pub fn sync_issues(records: &[IssueRecord], client: &dyn GitHubClient, repo: &RepoId) -> Result<SyncSummary> {
	info!("syncing {} issues with {repo}", records.len());

	let existing = client.list_issues(repo, SYNC_MARKER_LABEL, "all")?;
	let existing_titles: HashSet<String> = existing.into_iter().map(|issue| issue.title).collect();
	info!("found {} existing kanban issues", existing_titles.len());

	let mut summary = SyncSummary {
		total: records.len(),
		..Default::default()
	};

	for record in records {
		if existing_titles.contains(&record.github_title) {
			info!("skipping existing: {}", record.github_title);
			summary.skipped += 1;
			continue;
		}

		info!("creating: {}", record.github_title);
		match client.create_issue(repo, &record.github_title, &record.body, &record.labels) {
			Ok(created) => {
				info!("created issue #{} ({})", created.number, created.html_url);
				summary.created += 1;
			}
			Err(e) => warn!("error creating {}: {e}", record.github_title),
		}
	}

	Ok(summary)
}

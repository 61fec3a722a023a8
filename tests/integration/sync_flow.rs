//! End-to-end parse → sync runs against the mock client.

use kanban_sync::{SYNC_MARKER_LABEL, mock_github::MockGitHubClient, parse_kanban, sync_issues};

use crate::fixtures::KANBAN_BOARD;

fn repo() -> kanban_sync::RepoId {
	"owner/repo".parse().unwrap()
}

#[test]
fn full_board_parses_into_records() {
	let records = parse_kanban(KANBAN_BOARD);
	assert_eq!(records.len(), 3);

	assert_eq!(records[0].github_title, "[TASK] Fix desktop app file path loading");
	assert_eq!(records[1].github_title, "[FEATURE] Character data API integration");
	assert_eq!(records[2].github_title, "[Bug] Fix login crash");

	// Nested numbered steps stay inside entry 2 instead of becoming entries.
	assert!(records[1].body.contains("1. Implement character API calls"));

	let mut labels = records[0].labels.clone();
	labels.sort();
	let mut expected = vec!["task", "component-desktop", "phase-1-foundation", "priority-critical", "kanban-sync"];
	expected.sort();
	assert_eq!(labels, expected);

	// Entry without any metadata gets only the derived defaults.
	assert_eq!(records[2].labels, vec!["unknown", "priority-medium", "kanban-sync"]);
}

#[test]
fn fresh_board_creates_everything() {
	let records = parse_kanban(KANBAN_BOARD);
	let mock = MockGitHubClient::new();

	let summary = sync_issues(&records, &mock, &repo()).unwrap();

	assert_eq!(summary.created, 3);
	assert_eq!(summary.skipped, 0);
	assert_eq!(summary.total, 3);

	// Created issues carry the marker label so the next run can find them.
	for title in mock.created_titles() {
		let labels = mock.labels_of(&title).unwrap();
		assert!(labels.contains(&SYNC_MARKER_LABEL.to_string()), "{title} is missing the marker label");
	}
}

#[test]
fn rerun_skips_everything() {
	let records = parse_kanban(KANBAN_BOARD);
	let mock = MockGitHubClient::new();

	sync_issues(&records, &mock, &repo()).unwrap();
	let second = sync_issues(&records, &mock, &repo()).unwrap();

	assert_eq!(second.created, 0);
	assert_eq!(second.skipped, 3);
	assert_eq!(mock.issue_count(), 3);
}

#[test]
fn partially_synced_board_only_creates_the_gap() {
	let records = parse_kanban(KANBAN_BOARD);
	let mock = MockGitHubClient::new();
	mock.seed_issue("[Bug] Fix login crash", "old body", &[SYNC_MARKER_LABEL], "closed");

	let summary = sync_issues(&records, &mock, &repo()).unwrap();

	assert_eq!(summary.created, 2);
	assert_eq!(summary.skipped, 1);
	assert!(!mock.created_titles().contains(&"[Bug] Fix login crash".to_string()));
}

#[test]
fn create_failure_does_not_abort_the_batch() {
	let records = parse_kanban(KANBAN_BOARD);
	let mock = MockGitHubClient::new();
	mock.fail_creates_titled("[FEATURE] Character data API integration");

	let summary = sync_issues(&records, &mock, &repo()).unwrap();

	assert_eq!(summary.created, 2);
	assert_eq!(summary.skipped, 0);
	assert_eq!(summary.total, 3);
}

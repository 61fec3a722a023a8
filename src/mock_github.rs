//! Mock GitHub client for testing purposes.
//!
//! Stores all state in memory so the parse-and-sync path can be exercised
//! without hitting the real API. Failures are injectable per title (create)
//! and for the next listing call (baseline fetch).

use std::sync::{
	Mutex,
	atomic::{AtomicBool, AtomicU64, Ordering},
};

use color_eyre::eyre::{Result, bail};

use crate::github::{CreatedIssue, GitHubClient, GitHubIssue, GitHubLabel, RepoId};

/// Internal representation of an issue in the mock
#[derive(Clone, Debug)]
struct MockIssueData {
	number: u64,
	title: String,
	#[allow(dead_code)]
	body: String,
	state: String,
	labels: Vec<String>,
}

/// Mock GitHub client that stores all state in memory.
pub struct MockGitHubClient {
	/// Counter for generating unique issue numbers
	next_issue_number: AtomicU64,

	/// All issues, in creation order
	issues: Mutex<Vec<MockIssueData>>,

	/// Titles recorded by `create_issue` during the run (excludes seeded ones)
	created_titles: Mutex<Vec<String>>,

	/// Titles whose creation should fail
	failing_titles: Mutex<Vec<String>>,

	/// When set, the next `list_issues` call errors
	fail_next_list: AtomicBool,
}

impl MockGitHubClient {
	pub fn new() -> Self {
		Self {
			next_issue_number: AtomicU64::new(1),
			issues: Mutex::new(Vec::new()),
			created_titles: Mutex::new(Vec::new()),
			failing_titles: Mutex::new(Vec::new()),
			fail_next_list: AtomicBool::new(false),
		}
	}

	/// Add a pre-existing issue without going through `create_issue`.
	pub fn seed_issue(&self, title: &str, body: &str, labels: &[&str], state: &str) {
		let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
		self.issues.lock().unwrap().push(MockIssueData {
			number,
			title: title.to_string(),
			body: body.to_string(),
			state: state.to_string(),
			labels: labels.iter().map(|l| l.to_string()).collect(),
		});
	}

	/// Make every `create_issue` call for this exact title fail.
	pub fn fail_creates_titled(&self, title: &str) {
		self.failing_titles.lock().unwrap().push(title.to_string());
	}

	/// Make the next `list_issues` call fail.
	pub fn fail_next_list(&self) {
		self.fail_next_list.store(true, Ordering::SeqCst);
	}

	/// Titles created through `create_issue`, in call order.
	pub fn created_titles(&self) -> Vec<String> {
		self.created_titles.lock().unwrap().clone()
	}

	pub fn issue_count(&self) -> usize {
		self.issues.lock().unwrap().len()
	}

	/// Labels of the first issue with the given title, if any.
	pub fn labels_of(&self, title: &str) -> Option<Vec<String>> {
		self.issues.lock().unwrap().iter().find(|i| i.title == title).map(|i| i.labels.clone())
	}
}

impl Default for MockGitHubClient {
	fn default() -> Self {
		Self::new()
	}
}

impl GitHubClient for MockGitHubClient {
	fn list_issues(&self, _repo: &RepoId, label: &str, state: &str) -> Result<Vec<GitHubIssue>> {
		if self.fail_next_list.swap(false, Ordering::SeqCst) {
			bail!("Failed to list issues: 503 - mock outage");
		}

		let issues = self.issues.lock().unwrap();
		Ok(issues
			.iter()
			.filter(|i| i.labels.iter().any(|l| l == label))
			.filter(|i| state == "all" || i.state == state)
			.map(|i| GitHubIssue {
				number: i.number,
				title: i.title.clone(),
				labels: i.labels.iter().map(|l| GitHubLabel { name: l.clone() }).collect(),
				state: i.state.clone(),
			})
			.collect())
	}

	fn create_issue(&self, repo: &RepoId, title: &str, body: &str, labels: &[String]) -> Result<CreatedIssue> {
		if self.failing_titles.lock().unwrap().iter().any(|t| t == title) {
			bail!("Failed to create issue: 422 - mock rejected `{title}`");
		}

		let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
		self.issues.lock().unwrap().push(MockIssueData {
			number,
			title: title.to_string(),
			body: body.to_string(),
			state: "open".to_string(),
			labels: labels.to_vec(),
		});
		self.created_titles.lock().unwrap().push(title.to_string());

		Ok(CreatedIssue {
			number,
			html_url: format!("https://github.com/{}/{}/issues/{number}", repo.owner, repo.repo),
		})
	}
}

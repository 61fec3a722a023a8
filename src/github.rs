//! GitHub Issues boundary: the [`GitHubClient`] trait plus the real
//! `reqwest`-backed implementation. A mock implementation for tests lives in
//! [`crate::mock_github`].

use std::{fmt, str::FromStr};

use color_eyre::eyre::{Result, bail};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;

/// GitHub paginates issue listings; this is the maximum page size.
const PER_PAGE: usize = 100;

/// `owner/repo` pair identifying the target repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepoId {
	pub owner: String,
	pub repo: String,
}

#[derive(Debug, thiserror::Error)]
#[error("repository must be in `owner/repo` format, got `{0}`")]
pub struct ParseRepoIdError(pub String);

impl FromStr for RepoId {
	type Err = ParseRepoIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		match s.split_once('/') {
			Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => Ok(Self {
				owner: owner.to_string(),
				repo: repo.to_string(),
			}),
			_ => Err(ParseRepoIdError(s.to_string())),
		}
	}
}

impl fmt::Display for RepoId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.owner, self.repo)
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct GitHubIssue {
	pub number: u64,
	pub title: String,
	pub labels: Vec<GitHubLabel>,
	pub state: String, // "open" or "closed"
}

#[derive(Clone, Debug, Deserialize)]
pub struct GitHubLabel {
	pub name: String,
}

/// Response from GitHub when creating an issue
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
	pub number: u64,
	pub html_url: String,
}

/// GitHub API operations the synchronizer needs.
/// This allows for both real API calls and mock implementations for testing.
pub trait GitHubClient {
	/// Fetch all issues carrying the given label. `state` is `"open"`,
	/// `"closed"` or `"all"`.
	fn list_issues(&self, repo: &RepoId, label: &str, state: &str) -> Result<Vec<GitHubIssue>>;

	/// Create a new issue.
	fn create_issue(&self, repo: &RepoId, title: &str, body: &str, labels: &[String]) -> Result<CreatedIssue>;
}

/// Real GitHub API client. Blocking on purpose: the whole run is one
/// sequential pass, one request at a time.
pub struct RealGitHubClient {
	http_client: Client,
	github_token: String,
}

impl RealGitHubClient {
	pub fn new(config: &Config) -> Self {
		Self {
			http_client: Client::new(),
			github_token: config.github_token.clone(),
		}
	}

	fn auth_header(&self) -> String {
		format!("token {}", self.github_token)
	}
}

/// Accumulate pages from `fetch_page` (1-based page numbers) until a page
/// shorter than [`PER_PAGE`] signals the end of the listing.
fn collect_paginated<F>(mut fetch_page: F) -> Result<Vec<GitHubIssue>>
where
	F: FnMut(u32) -> Result<Vec<GitHubIssue>>,
{
	let mut issues = Vec::new();
	let mut page: u32 = 1;
	loop {
		let page_issues = fetch_page(page)?;
		let last_page = page_issues.len() < PER_PAGE;
		issues.extend(page_issues);
		if last_page {
			break;
		}
		page += 1;
	}
	Ok(issues)
}

impl GitHubClient for RealGitHubClient {
	fn list_issues(&self, repo: &RepoId, label: &str, state: &str) -> Result<Vec<GitHubIssue>> {
		let api_url = format!("https://api.github.com/repos/{}/{}/issues", repo.owner, repo.repo);

		collect_paginated(|page| {
			let page_str = page.to_string();
			let per_page_str = PER_PAGE.to_string();
			let res = self
				.http_client
				.get(&api_url)
				.header("User-Agent", "Rust GitHub Client")
				.header("Authorization", self.auth_header())
				.query(&[("labels", label), ("state", state), ("per_page", per_page_str.as_str()), ("page", page_str.as_str())])
				.send()?;

			if !res.status().is_success() {
				let status = res.status();
				let body = res.text().unwrap_or_default();
				bail!("Failed to list issues: {status} - {body}");
			}

			Ok(res.json::<Vec<GitHubIssue>>()?)
		})
	}

	fn create_issue(&self, repo: &RepoId, title: &str, body: &str, labels: &[String]) -> Result<CreatedIssue> {
		let api_url = format!("https://api.github.com/repos/{}/{}/issues", repo.owner, repo.repo);

		let res = self
			.http_client
			.post(&api_url)
			.header("User-Agent", "Rust GitHub Client")
			.header("Authorization", self.auth_header())
			.header("Content-Type", "application/json")
			.json(&serde_json::json!({ "title": title, "body": body, "labels": labels }))
			.send()?;

		if !res.status().is_success() {
			let status = res.status();
			let body = res.text().unwrap_or_default();
			bail!("Failed to create issue: {status} - {body}");
		}

		let issue = res.json::<CreatedIssue>()?;
		Ok(issue)
	}
}

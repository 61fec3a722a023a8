//! Environment-provided configuration. The tool runs as a standalone batch
//! job, so everything comes from two variables: `GITHUB_TOKEN` (required) and
//! `GITHUB_REPO` (optional, `owner/repo`).

use std::str::FromStr as _;

use crate::github::{ParseRepoIdError, RepoId};

/// Repository used when `GITHUB_REPO` is not set.
pub const DEFAULT_REPO: &str = "Spiritbocs/poetoybocs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("GITHUB_TOKEN environment variable not set. Create a personal access token at: https://github.com/settings/tokens")]
	MissingToken,

	#[error("GITHUB_REPO is invalid: {source}")]
	InvalidRepo {
		#[source]
		source: ParseRepoIdError,
	},
}

#[derive(Clone, Debug)]
pub struct Config {
	pub github_token: String,
	pub repo: RepoId,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_values(std::env::var("GITHUB_TOKEN").ok(), std::env::var("GITHUB_REPO").ok())
	}

	/// Build from explicit values. Split out of [`Self::from_env`] so tests
	/// don't have to mutate process-wide environment state.
	pub fn from_values(token: Option<String>, repo: Option<String>) -> Result<Self, ConfigError> {
		let github_token = token.ok_or(ConfigError::MissingToken)?;
		let repo = RepoId::from_str(repo.as_deref().unwrap_or(DEFAULT_REPO)).map_err(|source| ConfigError::InvalidRepo { source })?;
		Ok(Self { github_token, repo })
	}
}

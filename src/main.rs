use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _, bail};
use tracing_subscriber::EnvFilter;

use kanban_sync::{config::Config, github::RealGitHubClient, kanban, sync};

/// Creates GitHub issues from the entries of a markdown kanban board,
/// skipping entries that already exist on the tracker.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Path to the kanban board file
	#[arg(long, default_value = "KANBAN.md")]
	file: PathBuf,
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let cli = Cli::parse();
	let config = Config::from_env()?;

	if !cli.file.exists() {
		bail!("{} not found", cli.file.display());
	}

	println!("Parsing {}...", cli.file.display());
	let content = std::fs::read_to_string(&cli.file).wrap_err_with(|| format!("Failed to read {}", cli.file.display()))?;

	let records = kanban::parse_kanban(&content);
	if records.is_empty() {
		println!("No issues found in {}", cli.file.display());
		return Ok(());
	}
	println!("Found {} issues to sync", records.len());

	let client = RealGitHubClient::new(&config);
	let summary = sync::sync_issues(&records, &client, &config.repo)?;

	println!("\nSummary:");
	println!("  Parsed:  {}", records.len());
	println!("  Created: {}", summary.created);
	println!("  Skipped: {}", summary.skipped);
	println!("  Total:   {}", summary.total);
	println!("Sync complete");

	Ok(())
}

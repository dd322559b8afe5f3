// repo-revival: fetch GitHub repositories and report how abandoned they are
// and how promising a revival would be. Results are printed as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use repo_revival::{
    AnalyzerConfig, GitHubClient, GitHubProvider, RepositoryAnalyzer, RepositoryRecord,
};

#[derive(Parser, Debug)]
#[command(name = "repo-revival", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one or more repositories given as owner/name
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Repositories to analyze, e.g. rust-lang/rustlings
    #[arg(required = true)]
    repositories: Vec<String>,

    /// GitHub token; anonymous access is heavily rate limited
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// TOML file overriding fetch settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// API base URI for GitHub Enterprise
    #[arg(long)]
    base_uri: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn parse_slug(slug: &str) -> Result<(&str, &str)> {
    match slug.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => bail!("expected owner/name, got {slug:?}"),
    }
}

async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    let mut builder = GitHubClient::builder();
    if let Some(token) = args.token {
        builder = builder.personal_token(token);
    }
    if let Some(uri) = args.base_uri {
        builder = builder.base_uri(uri);
    }
    let client = builder.build().context("Failed to create GitHub client")?;

    let mut records: Vec<RepositoryRecord> = Vec::new();
    let mut failures = 0usize;
    for slug in &args.repositories {
        let (owner, name) = parse_slug(slug)?;
        match client.get_repository(owner, name).await? {
            Ok(record) => records.push(record),
            Err(e) => {
                error!("Failed to fetch {slug}: {e}");
                failures += 1;
            }
        }
    }

    let analyzer =
        RepositoryAnalyzer::new(GitHubProvider::new(client, &config)).with_config(config);
    info!("Analyzing {} repositories", records.len());

    let mut analyses = Vec::new();
    for (record, outcome) in records.iter().zip(analyzer.analyze_many(&records).await) {
        match outcome {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => {
                error!("Failed to analyze {}: {e}", record.full_name());
                failures += 1;
            }
        }
    }

    let rendered = if args.compact {
        serde_json::to_string(&analyses)?
    } else {
        serde_json::to_string_pretty(&analyses)?
    };
    println!("{rendered}");

    if failures > 0 {
        bail!("{failures} repositories could not be analyzed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
    }
}

mod config;
mod pr;
mod report;

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// pr-meta — fetch GitHub Pull Request metadata and extract labels, milestone,
/// changelog types and fork status; parse PR numbers out of commit logs.
#[derive(Parser, Debug)]
#[command(name = "pr-meta", version, about)]
struct Cli {
    /// Config file (defaults to .pr-meta.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise a pull request by number
    Pr {
        /// Pull request number
        number: u64,

        /// Repository under the DataDog organization
        #[arg(long, default_value = pr::DEFAULT_REPO)]
        repo: String,

        /// Print the HTTP status and body as returned, without status checks
        #[arg(long)]
        raw: bool,

        /// Optional output file path for a markdown summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarise the pull requests that contain a commit
    Commit {
        /// Commit hash
        hash: String,

        /// Repository under the DataDog organization
        #[arg(long)]
        repo: String,

        /// Print the HTTP status and body as returned, without status checks
        #[arg(long)]
        raw: bool,

        /// Optional output file path for a markdown summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print PR numbers referenced as `(#1234)` in commit log lines
    ParseLog {
        /// File with one commit log line per line (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = match cli.config.as_deref() {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load()?,
    };
    let client = pr::GitHubClient::new();

    match cli.command {
        Command::Pr {
            number,
            repo,
            raw,
            output,
        } => {
            let _span = info_span!("pr", number, repo = %repo).entered();
            if raw {
                let response = client.get_pr_raw(number, Some(&config), &repo).await?;
                print_raw(response).await?;
                return Ok(());
            }

            info!("fetching pull request from GitHub");
            let payload = client.get_pr(number, Some(&config), &repo).await?;
            let summary = report::build(&payload);
            debug!(labels = summary.labels.len(), milestone = %summary.milestone, "extracted PR metadata");
            report::output(&[summary], output.as_deref())?;
        }
        Command::Commit {
            hash,
            repo,
            raw,
            output,
        } => {
            let _span = info_span!("commit", hash = %hash, repo = %repo).entered();
            if raw {
                let response = client.get_pr_from_hash_raw(&hash, &repo, Some(&config)).await?;
                print_raw(response).await?;
                return Ok(());
            }

            info!("searching pull requests by commit");
            let payload = client.get_pr_from_hash(&hash, &repo, Some(&config)).await?;
            let summaries: Vec<_> = pr::get_search_items(&payload)
                .iter()
                .map(report::build)
                .collect();
            info!(found = summaries.len(), "search complete");
            report::output(&summaries, output.as_deref())?;
        }
        Command::ParseLog { file } => {
            let lines = match file {
                Some(path) => read_lines(BufReader::new(std::fs::File::open(path)?))?,
                None => read_lines(io::stdin().lock())?,
            };
            let numbers = pr::parse_pr_numbers(&lines);
            debug!(lines = lines.len(), found = numbers.len(), "parsed commit log");
            for number in numbers {
                println!("{}", number);
            }
        }
    }

    info!("done");
    Ok(())
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

async fn print_raw(response: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", response.status());
    println!("{}", response.text().await?);
    Ok(())
}

pub mod log;
pub mod payload;
pub mod types;

pub use log::parse_pr_numbers;
pub use payload::{from_contributor, get_changelog_types, get_pr_labels, get_pr_milestone, get_search_items};
pub use types::{CHANGELOG_LABEL_PREFIX, DEFAULT_REPO};

use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::{self, Config};

#[derive(Debug, Error)]
pub enum PrError {
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Thin client over the GitHub REST API.
///
/// Every call issues exactly one GET, with no retry and no pagination.
/// Credentials are resolved from the given config on each call.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(types::API_URL)
    }

    /// Point the client at another API root (used by tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn pr_url(&self, repo: &str, pr_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.base_url,
            types::DEFAULT_ORG,
            repo,
            pr_number
        )
    }

    // The `+` stays literal; GitHub reads it as the qualifier separator.
    fn search_url(&self, repo: &str, commit_hash: &str) -> String {
        format!(
            "{}/search/issues?q=sha:{}+repo:{}/{}",
            self.base_url,
            commit_hash,
            types::DEFAULT_ORG,
            repo
        )
    }

    async fn send(&self, url: &str, config: Option<&Config>) -> Result<Response, PrError> {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", types::USER_AGENT)
            .header("Accept", types::ACCEPT);

        let auth = config::resolve_auth(config);
        debug!(authenticated = auth.is_some(), "sending GitHub API request");
        if let Some(creds) = auth {
            request = request.basic_auth(creds.user, Some(creds.token));
        }

        let response = request.send().await?;
        debug!(status = %response.status(), "received GitHub API response");
        Ok(response)
    }

    /// Fetch the PR payload and return the response as-is, whatever its status.
    #[instrument(skip(self, config))]
    pub async fn get_pr_raw(
        &self,
        pr_number: u64,
        config: Option<&Config>,
        repo: &str,
    ) -> Result<Response, PrError> {
        self.send(&self.pr_url(repo, pr_number), config).await
    }

    /// Fetch and decode the PR payload. Non-2xx statuses are errors.
    #[instrument(skip(self, config))]
    pub async fn get_pr(
        &self,
        pr_number: u64,
        config: Option<&Config>,
        repo: &str,
    ) -> Result<Value, PrError> {
        let response = self.get_pr_raw(pr_number, config, repo).await?;
        decode(response).await
    }

    /// Search issues and PRs containing a commit, returning the response as-is.
    #[instrument(skip(self, config))]
    pub async fn get_pr_from_hash_raw(
        &self,
        commit_hash: &str,
        repo: &str,
        config: Option<&Config>,
    ) -> Result<Response, PrError> {
        self.send(&self.search_url(repo, commit_hash), config).await
    }

    /// Search issues and PRs containing a commit and decode the result.
    /// Non-2xx statuses are errors.
    #[instrument(skip(self, config))]
    pub async fn get_pr_from_hash(
        &self,
        commit_hash: &str,
        repo: &str,
        config: Option<&Config>,
    ) -> Result<Value, PrError> {
        let response = self.get_pr_from_hash_raw(commit_hash, repo, config).await?;
        decode(response).await
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn decode(response: Response) -> Result<Value, PrError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(PrError::Status {
            status,
            url: response.url().to_string(),
        });
    }
    Ok(response.json::<Value>().await?)
}

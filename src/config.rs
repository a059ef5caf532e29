use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::pr::types::Credentials;

/// Default config file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-meta.toml";

/// Fallback environment variables for GitHub credentials.
pub const USER_ENV_VAR: &str = "DD_GITHUB_USER";
pub const TOKEN_ENV_VAR: &str = "DD_GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .pr-meta.toml.
/// All fields are optional — the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GitHub-specific settings
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// GitHub login. If unset or empty, falls back to DD_GITHUB_USER.
    pub user: Option<String>,
    /// Personal access token. If unset or empty, falls back to DD_GITHUB_TOKEN.
    pub token: Option<String>,
}

impl Config {
    /// Load configuration from .pr-meta.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from a specific path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Resolve basic-auth credentials from the config, falling back to the
/// DD_GITHUB_USER / DD_GITHUB_TOKEN environment variables.
///
/// Returns `None` unless both a user and a token are found; callers then
/// issue unauthenticated requests.
pub fn resolve_auth(config: Option<&Config>) -> Option<Credentials> {
    resolve_auth_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve_auth`] with an explicit environment lookup.
pub fn resolve_auth_with<F>(config: Option<&Config>, env: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let github = config.map(|c| &c.github);
    let pick = |configured: Option<&String>, key: &str| {
        configured
            .filter(|value| !value.is_empty())
            .cloned()
            .or_else(|| env(key).filter(|value| !value.is_empty()))
    };

    let user = pick(github.and_then(|g| g.user.as_ref()), USER_ENV_VAR)?;
    let token = pick(github.and_then(|g| g.token.as_ref()), TOKEN_ENV_VAR)?;
    Some(Credentials { user, token })
}

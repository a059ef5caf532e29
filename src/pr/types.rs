/// Base URL of the GitHub REST API.
pub const API_URL: &str = "https://api.github.com";

/// Organization every request is scoped to.
pub const DEFAULT_ORG: &str = "DataDog";

/// Repository used when the caller does not name one.
pub const DEFAULT_REPO: &str = "integrations-core";

/// Labels starting with this prefix carry the changelog type, e.g. `changelog/Added`.
pub const CHANGELOG_LABEL_PREFIX: &str = "changelog/";

/// Value sent in the User-Agent header; GitHub rejects requests without one.
pub const USER_AGENT: &str = "pr-meta";

/// Accept header for the v3 REST API.
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Basic-auth pair used for GitHub requests.
/// Resolved fresh for every request, never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// GitHub login
    pub user: String,
    /// Personal access token
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_token() {
        let creds = Credentials {
            user: "octocat".to_string(),
            token: "s3cret".to_string(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("octocat"));
        assert!(!rendered.contains("s3cret"));
    }
}

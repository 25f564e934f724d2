//! Data-quality issue filing.

use std::time::Duration;

use chrono::NaiveDate;
use quantprint_core::percent;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{ResearchError, ResearchResult};

/// Default environment variable holding the GitHub token.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default GitHub API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// An issue to file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    /// Issue title.
    pub title: String,
    /// Issue body (markdown).
    pub body: String,
}

impl IssueDraft {
    /// Draft for an asset class whose coverage fell below threshold.
    #[must_use]
    pub fn data_quality(as_of: NaiveDate, asset_class: &str, coverage: f64) -> Self {
        let coverage = percent(coverage, 1);
        Self {
            title: format!(
                "Data quality alert: {} coverage {} on {}",
                asset_class, coverage, as_of
            ),
            body: format!(
                "Data coverage for {} fell below the threshold on {}.\n\n- Coverage: {}\n\nPlease review data ingestion and vendor feeds.",
                asset_class, as_of, coverage
            ),
        }
    }
}

/// Files issues somewhere.
pub trait IssueTracker {
    /// Files an issue and returns its number.
    ///
    /// `Ok(None)` means the tracker is disabled or rejected the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent.
    fn create_issue(&self, draft: &IssueDraft) -> ResearchResult<Option<u64>>;
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: Option<u64>,
}

/// Files issues on a GitHub repository through the REST API.
#[derive(Debug, Clone)]
pub struct GitHubIssueClient {
    repo: String,
    token: Option<String>,
    api_base: String,
    client: reqwest::blocking::Client,
}

impl GitHubIssueClient {
    /// Creates a client for `owner/name`, reading the token from `token_env`.
    ///
    /// A missing token or repository disables the client with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env(repo: impl Into<String>, token_env: &str) -> ResearchResult<Self> {
        Self::new(repo, std::env::var(token_env).ok())
    }

    /// Creates a client with an explicit token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(repo: impl Into<String>, token: Option<String>) -> ResearchResult<Self> {
        let repo = repo.into();
        let token = token.filter(|t| !t.trim().is_empty());
        if token.is_none() {
            warn!("No GitHub token found; GitHub integration will be disabled.");
        } else if repo.trim().is_empty() {
            warn!("No GitHub repository configured; GitHub integration will be disabled.");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("quantprint/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ResearchError::issue_tracker)?;

        Ok(Self {
            repo,
            token,
            api_base: GITHUB_API.to_string(),
            client,
        })
    }

    /// Overrides the API base URL (GitHub Enterprise).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns true if issues will actually be filed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.token.is_some() && !self.repo.trim().is_empty()
    }

    /// Issue endpoint URL.
    #[must_use]
    pub fn issues_url(&self) -> String {
        format!("{}/repos/{}/issues", self.api_base, self.repo)
    }
}

impl IssueTracker for GitHubIssueClient {
    fn create_issue(&self, draft: &IssueDraft) -> ResearchResult<Option<u64>> {
        let Some(token) = self.token.as_deref().filter(|_| self.is_enabled()) else {
            return Ok(None);
        };

        info!(title = %draft.title, "Creating GitHub issue");
        let response = self
            .client
            .post(self.issues_url())
            .header("Authorization", format!("token {}", token))
            .header("Accept", "application/vnd.github+json")
            .json(draft)
            .send()
            .map_err(ResearchError::issue_tracker)?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let text = response.text().unwrap_or_default();
            error!(status = status.as_u16(), body = %text, "Failed to create issue");
            return Ok(None);
        }

        let created: CreatedIssue = response.json().map_err(ResearchError::issue_tracker)?;
        Ok(created.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    #[test]
    fn test_data_quality_draft() {
        let draft = IssueDraft::data_quality(as_of(), "rates", 0.5);

        assert_eq!(draft.title, "Data quality alert: rates coverage 50.0% on 2024-06-28");
        assert_eq!(
            draft.body,
            "Data coverage for rates fell below the threshold on 2024-06-28.\n\n- Coverage: 50.0%\n\nPlease review data ingestion and vendor feeds."
        );
    }

    #[test]
    fn test_draft_serializes_as_request_body() {
        let draft = IssueDraft::data_quality(as_of(), "fx", 0.0);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert!(json["title"].as_str().unwrap().contains("fx coverage 0.0%"));
    }

    #[test]
    fn test_missing_token_disables_client() {
        let client = GitHubIssueClient::new("owner/repo", None).unwrap();
        assert!(!client.is_enabled());

        let draft = IssueDraft::data_quality(as_of(), "equity", 0.1);
        assert_eq!(client.create_issue(&draft).unwrap(), None);
    }

    #[test]
    fn test_missing_repo_disables_client() {
        let client = GitHubIssueClient::new("", Some("secret".into())).unwrap();
        assert!(!client.is_enabled());

        let draft = IssueDraft::data_quality(as_of(), "equity", 0.1);
        assert_eq!(client.create_issue(&draft).unwrap(), None);
    }

    #[test]
    fn test_blank_token_is_missing() {
        let client = GitHubIssueClient::new("owner/repo", Some("  ".into())).unwrap();
        assert!(!client.is_enabled());
    }

    #[test]
    fn test_issues_url() {
        let client = GitHubIssueClient::new("owner/repo", Some("t".into()))
            .unwrap()
            .with_api_base("https://github.example.com/api/v3/");

        assert!(client.is_enabled());
        assert_eq!(
            client.issues_url(),
            "https://github.example.com/api/v3/repos/owner/repo/issues"
        );
    }
}

//! Crate for looking up issues in Jira.
//!
//! The pull request labeler only needs one thing from Jira: the type of the
//! issue a pull request refers to. [`JiraClient`] performs a single
//! authenticated `GET /rest/api/3/issue/{key}` per lookup and returns
//! `fields.issuetype.name` from the response.
//!
//! Jira Cloud authenticates REST calls with HTTP Basic authentication using the
//! account e-mail as user name and an API token as password.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Issue, IssueFields, IssueType};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Trait for resolving the type of an issue in an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Returns the issue type name (e.g. `"Bug"`, `"Story"`) of the issue with
    /// the given key.
    ///
    /// # Errors
    ///
    /// Any failure to obtain the name is an error; implementations do not retry.
    async fn get_issue_type(&self, issue_key: &str) -> Result<String, Error>;
}

/// A Jira REST API client authenticated with a user name and API token.
#[derive(Debug)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    token: SecretString,
}

impl JiraClient {
    /// Creates a client for the Jira instance at `base_url`.
    ///
    /// A trailing `/` on the base URL is accepted, as is a context path such
    /// as `https://example.com/jira`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBaseUrl` when the URL cannot be parsed or is not
    /// an `http`/`https` URL.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use jira_client::{IssueTracker, JiraClient};
    /// use secrecy::SecretString;
    ///
    /// # async fn example() -> Result<(), jira_client::Error> {
    /// let client = JiraClient::new(
    ///     "https://example.atlassian.net",
    ///     "bot@example.com",
    ///     SecretString::from("api-token".to_string()),
    /// )?;
    ///
    /// let issue_type = client.get_issue_type("HT-1234").await?;
    /// println!("HT-1234 is a {}", issue_type);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        token: SecretString,
    ) -> Result<Self, Error> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed,
            username: username.into(),
            token,
        })
    }

    /// Builds `{base}/rest/api/3/issue/{issue_key}`.
    ///
    /// The key is appended as a single path segment, so characters such as
    /// `/` or `?` in a key are percent-encoded rather than changing the route.
    pub fn issue_url(&self, issue_key: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["rest", "api", "3", "issue", issue_key]);
        Ok(url)
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    #[instrument(skip(self), fields(issue_key = %issue_key))]
    async fn get_issue_type(&self, issue_key: &str) -> Result<String, Error> {
        let url = self.issue_url(issue_key)?;
        debug!(url = %url, "Requesting issue from Jira");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(self.token.expose_secret()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(issue_key = issue_key, error = %e, "Failed to send request to Jira");
                Error::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                issue_key = issue_key,
                status = status.as_u16(),
                "Jira returned a non-success status"
            );
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(Error::Network)?;
        let issue: Issue = serde_json::from_slice(&body).map_err(|e| {
            error!(issue_key = issue_key, error = %e, "Failed to parse Jira issue");
            Error::InvalidBody(e)
        })?;

        let issue_type = issue
            .issue_type_name()
            .ok_or_else(|| {
                error!(issue_key = issue_key, "Jira issue has no issue type name");
                Error::MissingIssueType
            })?
            .to_string();

        info!(
            issue_key = issue_key,
            issue_type = issue_type,
            "Fetched issue type from Jira"
        );
        Ok(issue_type)
    }
}

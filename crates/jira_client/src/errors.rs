//! Error types for Jira client operations.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while looking up an issue in Jira.
///
/// Every variant is terminal for the caller; the client never retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured Jira base URL cannot be used to build request URLs.
    #[error("Invalid Jira base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The base URL as configured.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// The request did not complete (DNS, connection, TLS or body read failure).
    #[error("Failed to reach Jira: {0}")]
    Network(#[source] reqwest::Error),

    /// Jira answered with a non-success status, e.g. 401 for bad credentials
    /// or 404 for an unknown issue key.
    #[error("Jira responded with unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code returned by Jira.
        status: u16,
    },

    /// The response body is not the JSON document Jira normally returns.
    #[error("Failed to parse Jira response: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The issue was returned without `fields.issuetype.name`.
    #[error("Jira response does not contain an issue type name")]
    MissingIssueType,
}

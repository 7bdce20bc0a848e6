//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when the labeler talks to
//! the GitHub REST API: reading the label mapping document from a repository
//! and adding a label to a pull request.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_file_content("owner", "repo", ".github/labels.yml", "abc123").await {
///     Ok(file) => println!("Fetched {}", file.path),
///     Err(Error::NotFound) => eprintln!("No such file at that revision"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered the request with a non-success status.
    ///
    /// The message is the `message` field of GitHub's error body, e.g.
    /// `"Validation Failed"` or `"Resource not accessible by integration"`.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Error message returned by GitHub.
        message: String,
    },

    /// Authentication or GitHub client initialization failure.
    ///
    /// The contained string provides specific details about the failure, for
    /// instance an unparseable API base URL.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// Produced when the body cannot be deserialized into the expected model,
    /// for example when a content path points at a directory instead of a file.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// Returned for a 404 status: the repository, the file at the requested
    /// revision, or the pull request does not exist or is not visible to the
    /// token in use.
    #[error("Resource not found")]
    NotFound,

    /// The request never produced a GitHub response (connection, URI or
    /// header failure).
    #[error("Failed to send request to GitHub: {0}")]
    Transport(String),
}

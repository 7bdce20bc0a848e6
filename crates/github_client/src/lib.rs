//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for the two GitHub operations the pull request
//! labeler needs: reading a single file from a repository at a given revision,
//! and adding a label to a pull request. The client authenticates with a
//! repository token, typically the `GITHUB_TOKEN` handed to a workflow run.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod contents;
pub use contents::{EntryType, FileContent};

pub mod label;
pub use label::{AddLabelsPayload, Label};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an already configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build an `Octocrab` instance that
    /// authenticates with a repository token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    /// Fetches a single file through the Contents API at the given revision.
    ///
    /// # Errors
    /// Returns `Error::NotFound` when the file does not exist at `reference`,
    /// `Error::ApiError` for any other GitHub error response and
    /// `Error::InvalidResponse` when the path does not resolve to a file.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, path = %path, reference = %reference))]
    async fn get_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<FileContent, Error> {
        let route = contents_route(owner, repo, path)?;

        debug!("Making API call to: {}", route);
        let response: OctocrabResult<FileContent> =
            self.client.get(route, Some(&[("ref", reference)])).await;

        match response {
            Ok(file) if file.entry_type == EntryType::File => {
                info!(
                    path = file.path,
                    sha = file.sha,
                    encoding = file.encoding,
                    "Retrieved file content"
                );
                Ok(file)
            }
            Ok(file) => {
                error!(
                    path = file.path,
                    entry_type = ?file.entry_type,
                    "Requested path is not a regular file"
                );
                Err(Error::InvalidResponse)
            }
            Err(e) => Err(map_octocrab_error("Failed to get file content", e)),
        }
    }

    /// Adds a single label to a pull request.
    ///
    /// Pull requests share the issues label endpoint, so the pull request
    /// number is used as the issue number.
    ///
    /// # Errors
    /// Returns `Error::ApiError` when GitHub rejects the label (for example a
    /// 422 for an invalid label or a 403 for a token without write access).
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, pr_number = pr_number, label = %label))]
    async fn add_label_to_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        label: &str,
    ) -> Result<Vec<Label>, Error> {
        let route = format!("/repos/{}/{}/issues/{}/labels", owner, repo, pr_number);
        let payload = AddLabelsPayload {
            labels: vec![label.to_string()],
        };

        let response: OctocrabResult<Vec<Label>> = self.client.post(route, Some(&payload)).await;
        match response {
            Ok(labels) => {
                info!(
                    pr_number = pr_number,
                    label = label,
                    label_count = labels.len(),
                    "Added label to pull request"
                );
                Ok(labels)
            }
            Err(e) => Err(map_octocrab_error("Failed to add label to pull request", e)),
        }
    }
}

/// Trait for the repository operations used by the labeler.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Retrieves a single file from a repository at a specific revision.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `path` - Path of the file within the repository.
    /// * `reference` - Commit SHA, branch or tag to read the file at.
    ///
    /// # Returns
    ///
    /// The file with its content still transport encoded.
    async fn get_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<FileContent, Error>;

    /// Adds a label to a pull request, keeping the labels already present.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `pr_number` - The number of the pull request.
    /// * `label` - The name of the label to add.
    ///
    /// # Returns
    ///
    /// The full set of labels on the pull request after the change.
    async fn add_label_to_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        label: &str,
    ) -> Result<Vec<Label>, Error>;
}

/// Creates an `Octocrab` client authenticated with a personal or installation token.
///
/// # Arguments
///
/// * `token` - The token used for the `Authorization` header.
/// * `api_url` - Optional API base URL, e.g. the `GITHUB_API_URL` of a GitHub
///   Enterprise Server instance. `None` uses `https://api.github.com`.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URL cannot be parsed or the
/// client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, Error};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let octocrab = create_token_client("ghp_example", None)?;
///     let client = GitHubClient::new(octocrab);
///
///     // Use `client` to perform API operations
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, api_url: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(url) = api_url {
        builder = builder.base_uri(url).map_err(|e| {
            error!(api_url = url, error = %e, "Failed to parse GitHub API base URL");
            Error::AuthError(format!("Invalid GitHub API URL '{}': {}", url, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client with token credentials");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

/// Builds `/repos/{owner}/{repo}/contents/{path}` with every segment
/// percent-encoded.
///
/// The repository path is split on `/`, so nested paths keep their structure
/// while spaces and non-ASCII characters inside a segment are escaped.
fn contents_route(owner: &str, repo: &str, path: &str) -> Result<String, Error> {
    let mut url = Url::parse("https://api.github.com/")
        .map_err(|e| Error::Transport(format!("Failed to build contents route: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| Error::Transport("Failed to build contents route".to_string()))?
        .clear()
        .extend(["repos", owner, repo, "contents"])
        .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url.path().to_string())
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    log_octocrab_error(message, &e);

    match e {
        octocrab::Error::GitHub { source, .. } => {
            if source.status_code == http::StatusCode::NOT_FOUND {
                Error::NotFound
            } else {
                Error::ApiError {
                    status: source.status_code.as_u16(),
                    message: source.message.clone(),
                }
            }
        }
        octocrab::Error::Serde { .. } | octocrab::Error::Json { .. } => Error::InvalidResponse,
        other => Error::Transport(other.to_string()),
    }
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => error!(
            error_message = source.message,
            status = source.status_code.as_u16(),
            "{}. Received an error from GitHub",
            message
        ),
        octocrab::Error::UriParse { source, .. } => error!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, .. } => error!(
            error_message = source.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, .. } => error!(
            error_message = source.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, .. } => error!(
            error_message = source.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

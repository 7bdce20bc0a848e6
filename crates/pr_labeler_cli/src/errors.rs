use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can end a run of the `pr-labeler` binary.
///
/// Pipeline errors are shown unchanged so the workflow annotation carries the
/// same text the labeling stage produced.
#[derive(Error, Debug)]
pub enum Error {
    /// A labeling stage failed, or the run parameters and event context were
    /// unusable.
    #[error(transparent)]
    Pipeline(#[from] pr_labeler_core::Error),

    /// The GitHub client could not be constructed.
    #[error("Failed to create GitHub client: {0}")]
    GitHubClient(#[from] github_client::Error),

    /// The Jira client could not be constructed.
    #[error("Failed to create Jira client: {0}")]
    JiraClient(#[from] jira_client::Error),
}

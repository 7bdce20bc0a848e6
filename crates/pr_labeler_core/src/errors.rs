use thiserror::Error;

use crate::mapping::MappingError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Fatal failures of a labeling run.
///
/// Each variant corresponds to one stage of the pipeline so callers and tests
/// can tell them apart. The two soft outcomes, a title without a ticket
/// reference and an issue type without a configured label, are not errors;
/// they are reported through [`crate::RunOutcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// A required run parameter was absent or blank.
    ///
    /// Raised before any network call is made.
    #[error("Input required and not supplied: {parameter}")]
    ConfigMissing {
        /// Name of the missing parameter, e.g. `jira-url`.
        parameter: String,
    },

    /// The triggering event does not describe a usable pull request.
    ///
    /// Raised when the event payload cannot be read, is not a pull request
    /// event, or the repository/revision information is malformed.
    #[error("Pull request context is unavailable: {reason}")]
    ContextUnavailable {
        /// Description of what is missing or malformed.
        reason: String,
    },

    /// The ticket extraction pattern does not compile or has no capture group.
    #[error("Invalid ticket pattern '{pattern}': {reason}")]
    PatternInvalid {
        /// The pattern as configured.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// The label mapping document could not be retrieved or decoded.
    #[error("Failed to load label mapping from '{path}': {reason}")]
    MappingFetchFailed {
        /// Repository path of the mapping document.
        path: String,
        /// Description of the retrieval or decoding failure.
        reason: String,
    },

    /// The label mapping document is not a flat mapping of strings to strings.
    #[error("Invalid label mapping in '{path}': {source}")]
    MappingParseFailed {
        /// Repository path of the mapping document.
        path: String,
        /// The validation failure.
        #[source]
        source: MappingError,
    },

    /// The issue tracker lookup failed.
    #[error("Failed to fetch issue type for ticket {ticket}: {source}")]
    TrackerQueryFailed {
        /// The ticket reference that was looked up.
        ticket: String,
        /// The tracker client failure.
        #[source]
        source: jira_client::Error,
    },

    /// GitHub rejected the label mutation.
    #[error(
        "Failed to add label '{label}' to pull request #{pr_number}. Check that the '{label}' label exists: {source}"
    )]
    LabelApplyFailed {
        /// The label that could not be applied.
        label: String,
        /// Number of the pull request.
        pr_number: u64,
        /// The GitHub client failure.
        #[source]
        source: github_client::Error,
    },
}

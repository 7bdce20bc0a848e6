//! Run parameters of the `pr-labeler` binary.
//!
//! Every parameter can be passed as a flag or through the environment. The
//! environment names are the ones GitHub Actions uses for action inputs
//! (`INPUT_<NAME>`) and for the workflow context (`GITHUB_*`), so the binary
//! runs unchanged as an action step.

use std::path::PathBuf;

use clap::Args;
use pr_labeler_core::Error;
use secrecy::SecretString;
use tracing::debug;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default GitHub REST endpoint.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Raw run parameters as supplied on the command line or by the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Token with write access to the repository's pull requests
    #[arg(long = "repo-token", env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    pub repo_token: Option<String>,

    /// Base URL of the Jira instance, e.g. https://example.atlassian.net
    #[arg(long = "jira-url", env = "INPUT_JIRA-URL")]
    pub jira_url: Option<String>,

    /// Jira account used for the issue lookup
    #[arg(long = "jira-username", env = "INPUT_JIRA-USERNAME")]
    pub jira_username: Option<String>,

    /// Jira API token for the account
    #[arg(long = "jira-token", env = "INPUT_JIRA-TOKEN", hide_env_values = true)]
    pub jira_token: Option<String>,

    /// Pattern whose first capture group is the ticket reference.
    /// Uses Rust regex syntax: lookaround and backreferences are not supported.
    #[arg(long = "ticket-regex", env = "INPUT_TICKET-REGEX")]
    pub ticket_regex: Option<String>,

    /// Repository path of the issue type to label mapping
    #[arg(long = "configuration-path", env = "INPUT_CONFIGURATION-PATH")]
    pub configuration_path: Option<String>,

    /// Path of the JSON payload of the triggering event
    #[arg(long = "event-path", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository in owner/repo form
    #[arg(long = "repository", env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit the mapping document is read at
    #[arg(long = "sha", env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// GitHub REST endpoint, for GitHub Enterprise Server
    #[arg(long = "github-api-url", env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,
}

/// Validated run parameters.
#[derive(Debug)]
pub struct RunConfig {
    pub repo_token: SecretString,
    pub jira_url: String,
    pub jira_username: String,
    pub jira_token: SecretString,
    pub ticket_regex: String,
    pub configuration_path: String,
    pub github_api_url: String,
}

impl RunConfig {
    /// Check that every required parameter is present and not blank.
    ///
    /// The ticket pattern is kept as given; only surrounding whitespace is
    /// removed from the other values.
    ///
    /// # Errors
    /// Returns `Error::ConfigMissing` naming the first missing parameter.
    pub fn from_args(args: &RunArgs) -> Result<Self, Error> {
        let repo_token = required("repo-token", &args.repo_token)?;
        let jira_url = required("jira-url", &args.jira_url)?;
        let jira_username = required("jira-username", &args.jira_username)?;
        let jira_token = required("jira-token", &args.jira_token)?;
        let ticket_regex = required("ticket-regex", &args.ticket_regex)?;
        let configuration_path = required("configuration-path", &args.configuration_path)?;

        let github_api_url = args
            .github_api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_GITHUB_API_URL)
            .to_string();

        debug!(
            jira_url = jira_url.trim(),
            jira_username = jira_username.trim(),
            configuration_path = configuration_path.trim(),
            github_api_url = %github_api_url,
            "Loaded run parameters"
        );

        Ok(Self {
            repo_token: SecretString::from(repo_token.trim().to_string()),
            jira_url: jira_url.trim().to_string(),
            jira_username: jira_username.trim().to_string(),
            jira_token: SecretString::from(jira_token.trim().to_string()),
            ticket_regex: ticket_regex.to_string(),
            configuration_path: configuration_path.trim().to_string(),
            github_api_url,
        })
    }
}

fn required<'a>(parameter: &str, value: &'a Option<String>) -> Result<&'a str, Error> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::ConfigMissing {
            parameter: parameter.to_string(),
        }),
    }
}

//! Wires the real GitHub and Jira clients into a labeling run.

use github_client::{create_token_client, GitHubClient};
use jira_client::JiraClient;
use pr_labeler_core::{Orchestrator, PipelineSettings, RunOutcome};
use secrecy::ExposeSecret;
use tracing::{info, instrument};

use crate::config::{RunArgs, RunConfig};
use crate::errors::Error;
use crate::event::load_pull_request_context;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Label the pull request that triggered the workflow.
///
/// Parameters, pattern and event context are all validated before the first
/// network call.
#[instrument(skip(args))]
pub async fn label_pull_request(args: &RunArgs) -> Result<RunOutcome, Error> {
    let config = RunConfig::from_args(args)?;
    let settings = PipelineSettings::new(&config.ticket_regex, config.configuration_path.clone())?;
    let context = load_pull_request_context(args)?;

    info!(
        repository = %context.full_name(),
        pr_number = context.number,
        "Labeling pull request"
    );

    let octocrab = create_token_client(
        config.repo_token.expose_secret(),
        Some(config.github_api_url.as_str()),
    )?;
    let github = GitHubClient::new(octocrab);
    let jira = JiraClient::new(&config.jira_url, config.jira_username, config.jira_token)?;

    let orchestrator = Orchestrator::new(settings, &github, &jira);
    let outcome = orchestrator.run(&context).await?;
    Ok(outcome)
}

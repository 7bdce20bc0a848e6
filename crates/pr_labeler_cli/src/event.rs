//! Pull request context from the GitHub Actions workflow environment.

use std::fs;
use std::path::Path;

use pr_labeler_core::{Error, PullRequestContext};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::RunArgs;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// The parts of a webhook event payload the labeler reads.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Read the event payload at `path`.
///
/// # Errors
/// Returns `Error::ContextUnavailable` if the file cannot be read or is not
/// JSON.
pub fn read_event_payload(path: &Path) -> Result<EventPayload, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::ContextUnavailable {
        reason: format!("cannot read event payload '{}': {}", path.display(), e),
    })?;

    serde_json::from_str(&text).map_err(|e| Error::ContextUnavailable {
        reason: format!("event payload '{}' is not valid JSON: {}", path.display(), e),
    })
}

/// Build the pull request context from the event payload, repository slug and
/// revision.
///
/// # Errors
/// Returns `Error::ContextUnavailable` when any of them is missing or the
/// event is not a pull request event.
#[instrument(skip(args))]
pub fn load_pull_request_context(args: &RunArgs) -> Result<PullRequestContext, Error> {
    let event_path = args
        .event_path
        .as_deref()
        .ok_or_else(|| Error::ContextUnavailable {
            reason: "no event payload path was supplied (GITHUB_EVENT_PATH)".to_string(),
        })?;

    let payload = read_event_payload(event_path)?;
    let pull_request = payload
        .pull_request
        .ok_or_else(|| Error::ContextUnavailable {
            reason: "the triggering event is not a pull request event".to_string(),
        })?;

    let repository = args
        .repository
        .as_deref()
        .ok_or_else(|| Error::ContextUnavailable {
            reason: "no repository was supplied (GITHUB_REPOSITORY)".to_string(),
        })?;

    let context = PullRequestContext::from_repository_slug(
        repository,
        pull_request.number,
        pull_request.title.unwrap_or_default(),
        args.sha.clone().unwrap_or_default(),
    )?;

    debug!(
        repository = %context.full_name(),
        pr_number = context.number,
        revision = %context.revision,
        "Loaded pull request context"
    );
    Ok(context)
}

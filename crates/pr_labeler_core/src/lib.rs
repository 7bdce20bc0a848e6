//! Labels pull requests by the issue type of the Jira ticket named in their
//! title.
//!
//! A run extracts the ticket reference from the title, reads the issue type to
//! label mapping from the repository at the pull request's revision, asks the
//! issue tracker for the ticket's type and adds the mapped label. The GitHub
//! and Jira access sit behind the [`github_client::RepositoryClient`] and
//! [`jira_client::IssueTracker`] traits so the pipeline can be exercised
//! without a network.

pub mod config_loader;
pub mod context;
pub mod errors;
pub mod labeler;
pub mod mapping;
pub mod orchestrator;
pub mod ticket;

#[cfg(test)]
mod mocks;

pub use config_loader::ConfigLoader;
pub use context::PullRequestContext;
pub use errors::Error;
pub use labeler::Labeler;
pub use mapping::{DocumentFormat, LabelMapping, MappingError};
pub use orchestrator::{Orchestrator, PipelineSettings, RunOutcome, RunStage};
pub use ticket::{TicketReference, TitleParser};

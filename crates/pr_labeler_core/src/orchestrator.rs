//! Sequences a labeling run.
//!
//! A run moves through the stages below. Each stage only starts once the
//! previous one succeeded, so a title without a ticket reference never touches
//! the network and a broken mapping document never reaches the tracker.
//!
//! ```text
//! Init -> TitleParsed -> ConfigLoaded -> ClassificationFetched
//!      -> LabelResolved -> LabelApplied -> Done
//!
//! TitleParsed (no ticket)      -> NoTicket -> Done
//! ClassificationFetched (miss) -> NoLabel  -> Done
//! any stage (fatal error)      -> Failed
//! ```

use github_client::RepositoryClient;
use jira_client::IssueTracker;
use tracing::{debug, error, info, instrument, warn, Span};

use crate::config_loader::ConfigLoader;
use crate::context::PullRequestContext;
use crate::errors::Error;
use crate::labeler::Labeler;
use crate::ticket::{TicketReference, TitleParser};

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

/// Stage of a labeling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    /// Nothing has run yet.
    Init,
    /// A ticket reference was found in the title.
    TitleParsed,
    /// The label mapping was loaded and validated.
    ConfigLoaded,
    /// The tracker reported the ticket's issue type.
    ClassificationFetched,
    /// The issue type has a configured label.
    LabelResolved,
    /// The label was added to the pull request.
    LabelApplied,
    /// The run finished successfully.
    Done,
    /// The title carries no ticket reference.
    NoTicket,
    /// The issue type has no configured label.
    NoLabel,
    /// A stage failed.
    Failed,
}

impl RunStage {
    /// Stable name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStage::Init => "init",
            RunStage::TitleParsed => "title_parsed",
            RunStage::ConfigLoaded => "config_loaded",
            RunStage::ClassificationFetched => "classification_fetched",
            RunStage::LabelResolved => "label_resolved",
            RunStage::LabelApplied => "label_applied",
            RunStage::Done => "done",
            RunStage::NoTicket => "no_ticket",
            RunStage::NoLabel => "no_label",
            RunStage::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The title carries no ticket reference.
    NoTicket,

    /// The ticket's issue type has no entry in the mapping.
    Unmapped {
        /// Ticket found in the title
        ticket: TicketReference,
        /// Issue type reported by the tracker
        classification: String,
    },

    /// The label was added to the pull request.
    Labeled {
        /// Ticket found in the title
        ticket: TicketReference,
        /// Issue type reported by the tracker
        classification: String,
        /// Label added to the pull request
        label: String,
    },
}

impl RunOutcome {
    /// The label that was applied, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            RunOutcome::Labeled { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::NoTicket => write!(f, "No ticket reference found in the title"),
            RunOutcome::Unmapped {
                ticket,
                classification,
            } => write!(
                f,
                "No label is configured for issue type '{}' of {}",
                classification, ticket
            ),
            RunOutcome::Labeled {
                ticket,
                classification,
                label,
            } => write!(
                f,
                "Added label '{}' for {} ({})",
                label, ticket, classification
            ),
        }
    }
}

/// Validated settings of a run.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    parser: TitleParser,
    configuration_path: String,
}

impl PipelineSettings {
    /// Compile the ticket pattern and capture the mapping document path.
    ///
    /// # Errors
    /// - `Error::PatternInvalid` if the pattern does not compile or has no
    ///   capture group.
    /// - `Error::ConfigMissing` if the path is blank.
    pub fn new(pattern: &str, configuration_path: impl Into<String>) -> Result<Self, Error> {
        let configuration_path = configuration_path.into();
        if configuration_path.trim().is_empty() {
            return Err(Error::ConfigMissing {
                parameter: "configuration-path".to_string(),
            });
        }

        Ok(Self {
            parser: TitleParser::new(pattern)?,
            configuration_path,
        })
    }

    /// The compiled ticket pattern.
    pub fn parser(&self) -> &TitleParser {
        &self.parser
    }

    /// Repository path of the mapping document.
    pub fn configuration_path(&self) -> &str {
        &self.configuration_path
    }
}

/// Runs the labeling pipeline for one pull request.
pub struct Orchestrator<'a> {
    settings: PipelineSettings,
    loader: ConfigLoader<'a>,
    tracker: &'a dyn IssueTracker,
    labeler: Labeler<'a>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator.
    ///
    /// The repository client serves both the mapping document and the label
    /// mutation.
    pub fn new(
        settings: PipelineSettings,
        repository: &'a dyn RepositoryClient,
        tracker: &'a dyn IssueTracker,
    ) -> Self {
        Self {
            settings,
            loader: ConfigLoader::new(repository),
            tracker,
            labeler: Labeler::new(repository),
        }
    }

    /// Label the pull request according to its ticket's issue type.
    ///
    /// # Errors
    /// Any fatal failure of a stage is returned unchanged; later stages are
    /// not attempted.
    #[instrument(
        skip(self, context),
        fields(
            repository = %context.full_name(),
            pr_number = context.number,
            stage = %RunStage::Init,
        )
    )]
    pub async fn run(&self, context: &PullRequestContext) -> Result<RunOutcome, Error> {
        let mut stage = RunStage::Init;

        match self.run_stages(context, &mut stage).await {
            Ok(outcome) => {
                advance(&mut stage, RunStage::Done);
                info!(outcome = %outcome, "Labeling run completed");
                Ok(outcome)
            }
            Err(e) => {
                let failed_at = stage;
                advance(&mut stage, RunStage::Failed);
                error!(failed_at = %failed_at, error = %e, "Labeling run failed");
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        context: &PullRequestContext,
        stage: &mut RunStage,
    ) -> Result<RunOutcome, Error> {
        let ticket = match self.settings.parser().extract(&context.title) {
            Some(ticket) => ticket,
            None => {
                advance(stage, RunStage::NoTicket);
                return Ok(RunOutcome::NoTicket);
            }
        };
        advance(stage, RunStage::TitleParsed);

        let mapping = self
            .loader
            .load(context, self.settings.configuration_path())
            .await?;
        advance(stage, RunStage::ConfigLoaded);

        info!(ticket = %ticket, "Fetching issue type");
        let classification = self
            .tracker
            .get_issue_type(ticket.as_str())
            .await
            .map_err(|source| Error::TrackerQueryFailed {
                ticket: ticket.to_string(),
                source,
            })?;
        info!(ticket = %ticket, issue_type = %classification, "Found issue type");
        advance(stage, RunStage::ClassificationFetched);

        let label = match mapping.resolve(&classification) {
            Some(label) => label.to_string(),
            None => {
                warn!(
                    ticket = %ticket,
                    issue_type = %classification,
                    path = self.settings.configuration_path(),
                    "No label configured for issue type '{}'",
                    classification
                );
                advance(stage, RunStage::NoLabel);
                return Ok(RunOutcome::Unmapped {
                    ticket,
                    classification,
                });
            }
        };
        advance(stage, RunStage::LabelResolved);

        self.labeler.apply(context, &label).await?;
        advance(stage, RunStage::LabelApplied);

        Ok(RunOutcome::Labeled {
            ticket,
            classification,
            label,
        })
    }
}

fn advance(stage: &mut RunStage, next: RunStage) {
    debug!(from = %stage, to = %next, "Run stage changed");
    *stage = next;
    Span::current().record("stage", next.as_str());
}

//! Applies the resolved label to the pull request.

use github_client::RepositoryClient;
use tracing::{error, info, instrument};

use crate::context::PullRequestContext;
use crate::errors::Error;

/// Adds a single label to a pull request.
pub struct Labeler<'a> {
    client: &'a dyn RepositoryClient,
}

impl<'a> Labeler<'a> {
    /// Create a labeler backed by the given repository client.
    pub fn new(client: &'a dyn RepositoryClient) -> Self {
        Self { client }
    }

    /// Add `label` to the pull request described by `context`.
    ///
    /// Exactly one mutation call is made. The resulting label set is not
    /// read back.
    ///
    /// # Errors
    /// Returns `Error::LabelApplyFailed`, naming the label, if GitHub rejects
    /// the call.
    #[instrument(skip(self, context), fields(pr_number = context.number, label = %label))]
    pub async fn apply(&self, context: &PullRequestContext, label: &str) -> Result<(), Error> {
        info!("Adding label {} to PR #{}", label, context.number);

        self.client
            .add_label_to_pull_request(&context.owner, &context.repo, context.number, label)
            .await
            .map_err(|source| {
                error!(
                    label = label,
                    error = %source,
                    "Failed to add label. Check that the {} label exists.",
                    label
                );
                Error::LabelApplyFailed {
                    label: label.to_string(),
                    pr_number: context.number,
                    source,
                }
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockRepositoryClient;

    fn context() -> PullRequestContext {
        PullRequestContext::new("octo", "hello", 42, "[HT-1] Fix", "abc123")
    }

    #[tokio::test]
    async fn test_apply_adds_exactly_one_label() {
        let client = MockRepositoryClient::new();
        let labeler = Labeler::new(&client);

        labeler.apply(&context(), "bugfix").await.unwrap();

        assert_eq!(client.added_labels(), vec![(42, "bugfix".to_string())]);
    }

    #[tokio::test]
    async fn test_apply_failure_names_label() {
        let client = MockRepositoryClient::new().rejecting_labels(422);
        let labeler = Labeler::new(&client);

        let result = labeler.apply(&context(), "bugfix").await;

        match result {
            Err(e @ Error::LabelApplyFailed { .. }) => {
                assert!(e.to_string().contains("'bugfix'"));
            }
            other => panic!("Expected LabelApplyFailed, got {other:?}"),
        }
    }
}

//! Pull request context
//!
//! The immutable description of the pull request a run operates on. It is
//! built once at the entry point and handed by reference to every stage.

use crate::errors::Error;

/// The pull request that triggered the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Commit the label mapping document is read at
    pub revision: String,
}

impl PullRequestContext {
    /// Create a context from its parts.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
        title: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
            title: title.into(),
            revision: revision.into(),
        }
    }

    /// Create a context from an `owner/repo` slug such as `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    /// Returns `Error::ContextUnavailable` if the slug is not exactly two
    /// non-empty segments or the revision is blank.
    pub fn from_repository_slug(
        slug: &str,
        number: u64,
        title: impl Into<String>,
        revision: impl Into<String>,
    ) -> Result<Self, Error> {
        let (owner, repo) = slug
            .trim()
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
            .ok_or_else(|| Error::ContextUnavailable {
                reason: format!("repository '{}' is not in owner/repo form", slug),
            })?;

        let revision = revision.into();
        if revision.trim().is_empty() {
            return Err(Error::ContextUnavailable {
                reason: "no revision was supplied for the pull request".to_string(),
            });
        }

        Ok(Self::new(owner, repo, number, title, revision.trim()))
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

//! Response models for the Jira REST API.
//!
//! Only the fields the labeler reads are modelled; everything else in the
//! issue document is ignored during deserialization.

use serde::Deserialize;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// An issue as returned by `GET /rest/api/3/issue/{issueIdOrKey}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. `HT-1234`
    #[serde(default)]
    pub key: Option<String>,

    /// Issue fields
    #[serde(default)]
    pub fields: Option<IssueFields>,
}

impl Issue {
    /// Returns the name of the issue type, e.g. `Bug` or `Story`.
    pub fn issue_type_name(&self) -> Option<&str> {
        self.fields
            .as_ref()?
            .issuetype
            .as_ref()?
            .name
            .as_deref()
    }
}

/// The subset of issue fields used for classification.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    /// The issue type
    #[serde(default)]
    pub issuetype: Option<IssueType>,
}

/// Jira issue type.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueType {
    /// Display name of the issue type
    #[serde(default)]
    pub name: Option<String>,
}

//! Label domain types.
//!
//! This module contains types representing GitHub issue and pull request labels.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label on a pull request or issue.
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label {
///     name: "bugfix".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,
}

/// Request body for `POST /repos/{owner}/{repo}/issues/{number}/labels`.
///
/// GitHub appends the given names to the labels already on the issue or pull
/// request; existing labels are left in place.
#[derive(Debug, Clone, Serialize)]
pub struct AddLabelsPayload {
    /// Names of the labels to add
    pub labels: Vec<String>,
}

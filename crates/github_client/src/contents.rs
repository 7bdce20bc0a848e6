//! Repository contents domain types.
//!
//! This module contains the types returned by the GitHub Contents API when a
//! single file is requested at a specific revision.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "contents_tests.rs"]
mod tests;

/// A single file retrieved from the GitHub Contents API.
///
/// The `content` field is transport encoded as described by `encoding`. For
/// files up to 1 MB GitHub returns `"base64"` with the payload wrapped at 60
/// characters per line; larger files come back with encoding `"none"` and an
/// empty `content`. Decoding is left to the caller.
///
/// # Examples
///
/// ```rust
/// use github_client::{EntryType, FileContent};
///
/// let file = FileContent {
///     name: "labels.yml".to_string(),
///     path: ".github/labels.yml".to_string(),
///     entry_type: EntryType::File,
///     sha: "abc123".to_string(),
///     encoding: "base64".to_string(),
///     content: "QnVnOiBidWdmaXgK".to_string(),
/// };
///
/// assert!(file.is_base64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// File name (e.g., "labels.yml")
    pub name: String,

    /// Full path within repository (e.g., ".github/labels.yml")
    pub path: String,

    /// Entry type, `file` for regular files
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Git blob SHA of the file
    pub sha: String,

    /// Transport encoding of `content`
    #[serde(default)]
    pub encoding: String,

    /// Encoded file content
    #[serde(default)]
    pub content: String,
}

impl FileContent {
    /// Returns `true` when the content is base64 encoded.
    pub fn is_base64(&self) -> bool {
        self.encoding.eq_ignore_ascii_case("base64")
    }
}

/// Type of entry in a repository.
///
/// Maps to GitHub's content type field in the Contents API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Regular file
    File,

    /// Directory (can contain other entries)
    Dir,

    /// Symbolic link
    Symlink,

    /// Git submodule reference
    Submodule,
}

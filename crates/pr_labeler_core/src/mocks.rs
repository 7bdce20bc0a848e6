//! Hand-written test doubles for the client seams.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use github_client::{EntryType, FileContent, Label, RepositoryClient};
use jira_client::IssueTracker;

/// Build a Contents API file response with the payload wrapped the way
/// GitHub wraps it.
pub fn encoded_file(path: &str, text: &str) -> FileContent {
    let encoded = general_purpose::STANDARD.encode(text);
    let wrapped = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    FileContent {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        entry_type: EntryType::File,
        sha: "blobsha".to_string(),
        encoding: "base64".to_string(),
        content: format!("{}\n", wrapped),
    }
}

/// Repository client serving files from memory and recording label calls.
#[derive(Default)]
pub struct MockRepositoryClient {
    files: HashMap<String, FileContent>,
    label_rejection: Option<u16>,
    file_requests: Mutex<Vec<(String, String)>>,
    added: Mutex<Vec<(u64, String)>>,
}

impl MockRepositoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files
            .insert(path.to_string(), encoded_file(path, text));
        self
    }

    pub fn with_raw_file(mut self, file: FileContent) -> Self {
        self.files.insert(file.path.clone(), file);
        self
    }

    pub fn rejecting_labels(mut self, status: u16) -> Self {
        self.label_rejection = Some(status);
        self
    }

    /// `(path, revision)` of every file request.
    pub fn file_requests(&self) -> Vec<(String, String)> {
        self.file_requests.lock().unwrap().clone()
    }

    /// `(pr_number, label)` of every label request.
    pub fn added_labels(&self) -> Vec<(u64, String)> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryClient for MockRepositoryClient {
    async fn get_file_content(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<FileContent, github_client::Error> {
        self.file_requests
            .lock()
            .unwrap()
            .push((path.to_string(), reference.to_string()));

        self.files
            .get(path)
            .cloned()
            .ok_or(github_client::Error::NotFound)
    }

    async fn add_label_to_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        pr_number: u64,
        label: &str,
    ) -> Result<Vec<Label>, github_client::Error> {
        self.added
            .lock()
            .unwrap()
            .push((pr_number, label.to_string()));

        match self.label_rejection {
            Some(status) => Err(github_client::Error::ApiError {
                status,
                message: "Validation Failed".to_string(),
            }),
            None => Ok(vec![Label {
                name: label.to_string(),
            }]),
        }
    }
}

/// Issue tracker answering from a fixed table of issue types.
#[derive(Default)]
pub struct MockIssueTracker {
    issue_types: HashMap<String, String>,
    failure_status: Option<u16>,
    queries: Mutex<Vec<String>>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, key: &str, issue_type: &str) -> Self {
        self.issue_types
            .insert(key.to_string(), issue_type.to_string());
        self
    }

    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn get_issue_type(&self, issue_key: &str) -> Result<String, jira_client::Error> {
        self.queries.lock().unwrap().push(issue_key.to_string());

        if let Some(status) = self.failure_status {
            return Err(jira_client::Error::UnexpectedStatus { status });
        }

        self.issue_types
            .get(issue_key)
            .cloned()
            .ok_or(jira_client::Error::UnexpectedStatus { status: 404 })
    }
}

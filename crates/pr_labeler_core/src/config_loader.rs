//! Loads the label mapping document from the repository under review.

use base64::{engine::general_purpose, Engine as _};
use github_client::{FileContent, RepositoryClient};
use tracing::{error, info, instrument};

use crate::context::PullRequestContext;
use crate::errors::Error;
use crate::mapping::{DocumentFormat, LabelMapping};

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod tests;

/// Reads the label mapping from the repository at the pull request's revision.
///
/// The document is read at the commit under test rather than the default
/// branch, so a pull request that changes the mapping is labeled with the
/// mapping it proposes.
pub struct ConfigLoader<'a> {
    client: &'a dyn RepositoryClient,
}

impl<'a> ConfigLoader<'a> {
    /// Create a loader backed by the given repository client.
    pub fn new(client: &'a dyn RepositoryClient) -> Self {
        Self { client }
    }

    /// Fetch, decode and validate the mapping document at `path`.
    ///
    /// # Errors
    ///
    /// - `Error::MappingFetchFailed` if the file cannot be retrieved or its
    ///   content cannot be decoded to UTF-8 text.
    /// - `Error::MappingParseFailed` if the text is not a flat mapping of
    ///   strings to strings.
    #[instrument(skip(self, context), fields(path = %path, revision = %context.revision))]
    pub async fn load(
        &self,
        context: &PullRequestContext,
        path: &str,
    ) -> Result<LabelMapping, Error> {
        let file = self
            .client
            .get_file_content(&context.owner, &context.repo, path, &context.revision)
            .await
            .map_err(|e| {
                error!(path = path, error = %e, "Failed to load config file");
                Error::MappingFetchFailed {
                    path: path.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let document = decode_content(&file).map_err(|reason| {
            error!(path = path, reason = reason, "Failed to decode config file");
            Error::MappingFetchFailed {
                path: path.to_string(),
                reason,
            }
        })?;

        let mapping = LabelMapping::parse(&document, DocumentFormat::from_path(path)).map_err(
            |source| {
                error!(path = path, error = %source, "Config file is not a valid label mapping");
                Error::MappingParseFailed {
                    path: path.to_string(),
                    source,
                }
            },
        )?;

        info!(
            path = path,
            entries = mapping.len(),
            "Loaded label mapping"
        );
        Ok(mapping)
    }
}

/// Decode the base64 payload of a Contents API response to text.
///
/// GitHub wraps the payload across lines, so whitespace is dropped before
/// decoding.
fn decode_content(file: &FileContent) -> Result<String, String> {
    if !file.is_base64() {
        return Err(format!(
            "unsupported content encoding '{}' (files over 1 MB are not returned inline)",
            file.encoding
        ));
    }

    let compact: String = file
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| format!("content is not valid base64: {}", e))?;

    let text = String::from_utf8(bytes).map_err(|e| format!("content is not valid UTF-8: {}", e))?;

    Ok(text.trim_start_matches('\u{feff}').to_string())
}

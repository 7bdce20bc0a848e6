//! Ticket reference extraction from pull request titles.

use regex::Regex;
use tracing::info;

use crate::errors::Error;

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;

/// A work item identifier found in a pull request title, e.g. `HT-1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketReference(String);

impl TicketReference {
    /// Create a ticket reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TicketReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts ticket references from pull request titles.
///
/// The configured pattern must contain at least one capture group; the first
/// group is the ticket reference.
///
/// # Examples
///
/// ```rust
/// use pr_labeler_core::TitleParser;
///
/// let parser = TitleParser::new(r"\[((HT|ht)-\d*)]").unwrap();
///
/// let ticket = parser.extract("[HT-1234] Fix bug").unwrap();
/// assert_eq!(ticket.as_str(), "HT-1234");
///
/// assert!(parser.extract("Improve docs").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TitleParser {
    pattern: Regex,
}

impl TitleParser {
    /// Compile the extraction pattern.
    ///
    /// # Errors
    /// Returns `Error::PatternInvalid` if the pattern does not compile or
    /// contains no capture group.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|e| Error::PatternInvalid {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        // Group 0 is the whole match.
        if regex.captures_len() < 2 {
            return Err(Error::PatternInvalid {
                pattern: pattern.to_string(),
                reason: "pattern has no capture group for the ticket reference".to_string(),
            });
        }

        Ok(Self { pattern: regex })
    }

    /// The pattern as configured.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the first capture group of the leftmost match in `title`.
    ///
    /// A title that does not match, or a match where the first group is empty
    /// or did not participate, yields `None`.
    pub fn extract(&self, title: &str) -> Option<TicketReference> {
        let reference = self
            .pattern
            .captures(title)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str())
            .filter(|reference| !reference.is_empty());

        match reference {
            Some(reference) => {
                info!(ticket = reference, "Found potential ticket reference");
                Some(TicketReference::new(reference))
            }
            None => {
                info!(title = title, "No matching ticket found for title");
                None
            }
        }
    }
}

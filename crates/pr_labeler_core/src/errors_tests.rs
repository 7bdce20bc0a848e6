use super::*;
use std::error::Error as StdError;

#[test]
fn test_config_missing_error_display() {
    let error = Error::ConfigMissing {
        parameter: "jira-token".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Input required and not supplied: jira-token"
    );
}

#[test]
fn test_pattern_invalid_error_display() {
    let error = Error::PatternInvalid {
        pattern: "[".to_string(),
        reason: "unclosed character class".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid ticket pattern '[': unclosed character class"
    );
}

#[test]
fn test_mapping_parse_failed_keeps_source() {
    let error = Error::MappingParseFailed {
        path: ".github/labels.yml".to_string(),
        source: MappingError::Empty,
    };

    assert_eq!(
        error.to_string(),
        "Invalid label mapping in '.github/labels.yml': document is empty"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_tracker_query_failed_names_ticket() {
    let error = Error::TrackerQueryFailed {
        ticket: "HT-1234".to_string(),
        source: jira_client::Error::UnexpectedStatus { status: 404 },
    };

    let message = error.to_string();
    assert!(message.contains("HT-1234"));
    assert!(message.contains("404"));
}

#[test]
fn test_label_apply_failed_names_label() {
    let error = Error::LabelApplyFailed {
        label: "bugfix".to_string(),
        pr_number: 42,
        source: github_client::Error::NotFound,
    };

    assert_eq!(
        error.to_string(),
        "Failed to add label 'bugfix' to pull request #42. Check that the 'bugfix' label exists: Resource not found"
    );
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

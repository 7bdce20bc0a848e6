use super::*;
use serde_json::from_str;

#[test]
fn test_issue_type_name_from_full_issue() {
    let json_str = r#"{
        "id": "10002",
        "key": "HT-1234",
        "self": "https://example.atlassian.net/rest/api/3/issue/10002",
        "fields": {
            "summary": "Fix bug",
            "issuetype": {
                "id": "10004",
                "name": "Bug",
                "subtask": false
            },
            "labels": []
        }
    }"#;

    let issue: Issue = from_str(json_str).expect("Failed to deserialize Issue");

    assert_eq!(issue.key.as_deref(), Some("HT-1234"));
    assert_eq!(issue.issue_type_name(), Some("Bug"));
}

#[test]
fn test_issue_type_name_missing_fields() {
    let issue: Issue = from_str(r#"{"key": "HT-1"}"#).unwrap();

    assert_eq!(issue.issue_type_name(), None);
}

#[test]
fn test_issue_type_name_missing_issuetype() {
    let issue: Issue = from_str(r#"{"fields": {"summary": "x"}}"#).unwrap();

    assert_eq!(issue.issue_type_name(), None);
}

#[test]
fn test_issue_type_name_missing_name() {
    let issue: Issue = from_str(r#"{"fields": {"issuetype": {"id": "1"}}}"#).unwrap();

    assert_eq!(issue.issue_type_name(), None);
}

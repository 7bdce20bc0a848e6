use super::*;
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHA: &str = "6dcb09b5b57875f334f61aebed695e2e4193db5e";
const CONFIG_PATH: &str = ".github/labels.yml";

fn write_event(dir: &TempDir, title: &str) -> std::path::PathBuf {
    let path = dir.path().join("event.json");
    let body = json!({
        "action": "opened",
        "pull_request": { "number": 42, "title": title }
    });
    fs::write(&path, body.to_string()).expect("Failed to write event payload");
    path
}

fn args(server: &MockServer, event_path: std::path::PathBuf) -> RunArgs {
    RunArgs {
        repo_token: Some("ghs_test".to_string()),
        jira_url: Some(server.uri()),
        jira_username: Some("bot@example.com".to_string()),
        jira_token: Some("jira-secret".to_string()),
        ticket_regex: Some(r"\[((HT|ht)-\d*)]".to_string()),
        configuration_path: Some(CONFIG_PATH.to_string()),
        event_path: Some(event_path),
        repository: Some("octo/hello".to_string()),
        sha: Some(SHA.to_string()),
        github_api_url: Some(server.uri()),
    }
}

async fn mount_mapping(server: &MockServer, document: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/octo/hello/contents/{CONFIG_PATH}")))
        .and(query_param("ref", SHA))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "file",
            "encoding": "base64",
            "name": "labels.yml",
            "path": CONFIG_PATH,
            "content": general_purpose::STANDARD.encode(document),
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_issue(server: &MockServer, key: &str, issue_type: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/3/issue/{key}")))
        .and(basic_auth("bot@example.com", "jira-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": key,
            "fields": { "issuetype": { "name": issue_type } }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_label_pull_request_end_to_end() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    mount_mapping(&server, "Bug: bugfix\nStory: feature\n").await;
    mount_issue(&server, "HT-1234", "Bug").await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/hello/issues/42/labels"))
        .and(body_json(json!({ "labels": ["bugfix"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "bugfix", "color": "d73a4a" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let event_path = write_event(&temp_dir, "[HT-1234] Fix bug");
    let outcome = label_pull_request(&args(&server, event_path))
        .await
        .expect("Expected a labeled pull request");

    assert_eq!(outcome.label(), Some("bugfix"));
}

#[tokio::test]
async fn test_label_pull_request_without_ticket_makes_no_requests() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let event_path = write_event(&temp_dir, "Improve docs");
    let outcome = label_pull_request(&args(&server, event_path))
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoTicket);
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_label_pull_request_unmapped_type_adds_no_label() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    mount_mapping(&server, "Bug: bugfix\n").await;
    mount_issue(&server, "HT-9", "Epic").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let event_path = write_event(&temp_dir, "[HT-9] Roadmap");
    let outcome = label_pull_request(&args(&server, event_path))
        .await
        .unwrap();

    assert!(matches!(outcome, RunOutcome::Unmapped { .. }));
}

#[tokio::test]
async fn test_label_pull_request_missing_label_reports_label() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    mount_mapping(&server, "Bug: bugfix\n").await;
    mount_issue(&server, "HT-1", "Bug").await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/hello/issues/42/labels"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "documentation_url": "https://docs.github.com/rest/issues/labels"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event_path = write_event(&temp_dir, "[HT-1] Fix");
    let result = label_pull_request(&args(&server, event_path)).await;

    match result {
        Err(e @ Error::Pipeline(pr_labeler_core::Error::LabelApplyFailed { .. })) => {
            assert!(e.to_string().contains("Check that the 'bugfix' label exists"));
        }
        other => panic!("Expected LabelApplyFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_label_pull_request_missing_parameter_makes_no_requests() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut run_args = args(&server, write_event(&temp_dir, "[HT-1] Fix"));
    run_args.jira_url = Some(String::new());

    let result = label_pull_request(&run_args).await;

    match result {
        Err(Error::Pipeline(pr_labeler_core::Error::ConfigMissing { parameter })) => {
            assert_eq!(parameter, "jira-url");
        }
        other => panic!("Expected ConfigMissing, got {:?}", other),
    }
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_label_pull_request_invalid_jira_url() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut run_args = args(&server, write_event(&temp_dir, "[HT-1] Fix"));
    run_args.jira_url = Some("ftp://jira.example.com".to_string());

    let result = label_pull_request(&run_args).await;

    assert!(matches!(result, Err(Error::JiraClient(_))));
}

//! Integration tests using mock HTTP server
//!
//! Tests the full flow: stdin JSON → paginated HTTP requests → stdout line

use paginated_fetch::cli::{Cli, RunReport, Runner, EXIT_FAILURE, EXIT_SUCCESS};
use paginated_fetch::output::Envelope;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(input: &serde_json::Value) -> RunReport {
    Runner::new(Cli::default())
        .run_with_input(&input.to_string())
        .await
}

fn query(server: &MockServer, page_size: &str) -> serde_json::Value {
    json!({
        "api_url_base": format!("{}/v1/widgets", server.uri()),
        "api_token": "secret-token",
        "page_size": page_size,
    })
}

fn error_message(report: &RunReport) -> &str {
    match &report.envelope {
        Envelope::Failure { error } => error,
        Envelope::Success { .. } => panic!("Expected Failure, got {:?}", report.envelope),
    }
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_two_pages_are_combined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(query_param("page_size", "100"))
        .and(query_param_is_missing("page_token"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [1, 2],
            "nextPageToken": "t"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(query_param("page_size", "100"))
        .and(query_param("page_token", "t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [3],
            "nextPageToken": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_SUCCESS);
    assert_eq!(
        report.envelope.to_line().unwrap(),
        r#"{"combined_list": "[1, 2, 3]"}"#
    );
}

#[tokio::test]
async fn test_out_of_range_page_size_uses_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": ["a"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "5")).await;

    assert_eq!(report.exit_code, EXIT_SUCCESS);
    assert_eq!(
        report.envelope.to_line().unwrap(),
        r#"{"combined_list": "[\"a\"]"}"#
    );
}

#[tokio::test]
async fn test_valid_page_size_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page_size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "25")).await;

    assert_eq!(report.envelope, Envelope::empty());
}

#[tokio::test]
async fn test_page_cap_is_a_soft_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [{"n": 1}],
            "nextPageToken": "forever"
        })))
        .expect(20)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_SUCCESS);
    let Envelope::Success { combined_list } = &report.envelope else {
        panic!("Expected Success");
    };
    let items: Vec<serde_json::Value> = serde_json::from_str(combined_list).unwrap();
    assert_eq!(items.len(), 20);
}

#[tokio::test]
async fn test_missing_list_field_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [1],
            "nextPageToken": "next"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("page_token", "next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": [2]})))
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_SUCCESS);
    assert_eq!(
        report.envelope.to_line().unwrap(),
        r#"{"combined_list": "[2]"}"#
    );
}

// ============================================================================
// Fatal Errors
// ============================================================================

#[tokio::test]
async fn test_forbidden_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"message":"denied"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_FAILURE);
    assert_eq!(
        error_message(&report),
        r#"HTTP Error 403: Forbidden. Body: {"message":"denied"}"#
    );
}

#[tokio::test]
async fn test_error_on_later_page_discards_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [1],
            "nextPageToken": "p2"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("page_token", "p2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_FAILURE);
    assert!(error_message(&report).starts_with("HTTP Error 500"));
}

#[tokio::test]
async fn test_malformed_response_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let report = run(&query(&mock_server, "100")).await;

    assert_eq!(report.exit_code, EXIT_FAILURE);
    assert!(error_message(&report).starts_with("Failed to decode JSON response: "));
}

#[tokio::test]
async fn test_connection_refused_aborts() {
    let input = json!({
        "api_url_base": "http://127.0.0.1:1/v1/widgets",
        "api_token": "secret-token",
    });

    let report = run(&input).await;

    assert_eq!(report.exit_code, EXIT_FAILURE);
    assert!(error_message(&report).starts_with("URL Error: "));
}

#[tokio::test]
async fn test_timeout_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"list": []}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let cli = Cli {
        timeout_secs: 1,
        ..Cli::default()
    };
    let report = Runner::new(cli)
        .run_with_input(&query(&mock_server, "100").to_string())
        .await;

    assert_eq!(report.exit_code, EXIT_FAILURE);
    assert_eq!(error_message(&report), "URL Error: timed out after 1000ms");
}

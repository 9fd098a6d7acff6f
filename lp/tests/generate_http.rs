//! Integration tests for the streaming generation client using wiremock.

use lessonplan::config::GeneratorConfig;
use lessonplan::generate::{GenerateClient, RequestOutcome, Submission};
use tokio::sync::mpsc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GenerateClient {
    GenerateClient::from_config(&GeneratorConfig {
        base_url: server.uri(),
        timeout_ms: None,
    })
    .expect("Failed to build client")
}

/// Collect every outcome emitted for one submission
async fn collect(mut rx: mpsc::Receiver<RequestOutcome>) -> Vec<RequestOutcome> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }
    outcomes
}

fn chunk_text(outcomes: &[RequestOutcome]) -> String {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            RequestOutcome::Chunk(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_successful_generation_streams_body_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "prompt": "make a plan" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Water Cycle\nA lesson about water."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (tx, rx) = mpsc::channel(100);

    let submission = client.submit("make a plan", &tx).await.expect("Request should succeed");
    drop(tx);

    assert_eq!(
        submission,
        Submission::Completed("Water Cycle\nA lesson about water.".to_string())
    );

    let outcomes = collect(rx).await;
    assert_eq!(outcomes.first(), Some(&RequestOutcome::Pending));
    assert_eq!(outcomes.last(), Some(&RequestOutcome::Done));
    assert_eq!(chunk_text(&outcomes), "Water Cycle\nA lesson about water.");
}

#[tokio::test]
async fn test_rate_limited_request_emits_exactly_one_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Ratelimit-Limit", "5")
                .insert_header("X-Ratelimit-Remaining", "0")
                .insert_header("X-Ratelimit-Reset", "86400")
                .set_body_string("Too many requests"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (tx, rx) = mpsc::channel(100);

    let submission = client.submit("make a plan", &tx).await.expect("Refusal is not a transport error");
    drop(tx);

    let failure = match submission {
        Submission::Refused(failure) => failure,
        other => panic!("Expected refusal, got {:?}", other),
    };
    assert_eq!(failure.status, 429);
    assert_eq!(failure.message, "Too many requests");
    assert_eq!(failure.rate_limit.limit.as_deref(), Some("5"));
    assert_eq!(failure.rate_limit.remaining.as_deref(), Some("0"));
    assert_eq!(failure.rate_limit.reset.as_deref(), Some("86400"));
    assert!(failure.rate_limit.is_exhausted());

    let outcomes = collect(rx).await;
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0], RequestOutcome::Pending);
    assert!(matches!(outcomes[1], RequestOutcome::Failed(_)));
}

#[tokio::test]
async fn test_error_without_rate_limit_headers_is_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (tx, rx) = mpsc::channel(100);

    let submission = client.submit("make a plan", &tx).await.expect("Refusal is not a transport error");
    drop(tx);

    let failure = match submission {
        Submission::Refused(failure) => failure,
        other => panic!("Expected refusal, got {:?}", other),
    };
    assert_eq!(failure.status, 500);
    assert_eq!(failure.rate_limit.limit, None);
    assert_eq!(failure.rate_limit.remaining, None);
    assert_eq!(failure.rate_limit.reset, None);

    let outcomes = collect(rx).await;
    assert!(!outcomes.iter().any(|o| matches!(o, RequestOutcome::Chunk(_))));
}

#[tokio::test]
async fn test_empty_success_body_is_a_silent_no_op() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (tx, rx) = mpsc::channel(100);

    let submission = client.submit("make a plan", &tx).await.expect("Request should succeed");
    drop(tx);

    assert_eq!(submission, Submission::Empty);

    // Nothing after Pending: no Done, no Failed, no chunks
    let outcomes = collect(rx).await;
    assert_eq!(outcomes, vec![RequestOutcome::Pending]);
}

#[tokio::test]
async fn test_unreachable_backend_propagates_as_transport_error() {
    // Grab a port that was just released so nothing is listening on it
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = GenerateClient::from_config(&GeneratorConfig {
        base_url: uri,
        timeout_ms: None,
    })
    .expect("Failed to build client");

    let (tx, rx) = mpsc::channel(100);
    let result = client.submit("make a plan", &tx).await;
    drop(tx);

    let err = result.expect_err("Expected a transport error");
    assert!(err.is_connect());

    // Transport failures are not reported through the outcome sequence
    let outcomes = collect(rx).await;
    assert_eq!(outcomes, vec![RequestOutcome::Pending]);
}

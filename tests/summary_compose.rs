// Composer behavior across both modes: sentinels, wire contract, template
// structure.

use chrono::NaiveDate;

use horoscope_aggregator::summary::claude::{
    self, ClaudeClient, SummaryClient, UnconfiguredClient, MSG_CALL_FAILED, MSG_EMPTY_BUNDLE,
    MSG_NOT_CONFIGURED,
};
use horoscope_aggregator::summary::{compose, template, SummaryMode, SummaryRequest};
use horoscope_aggregator::{SourceResult, ZodiacSign};

fn request() -> SummaryRequest {
    SummaryRequest {
        bundle: vec![
            SourceResult {
                source: "마리끌레어 코리아".into(),
                text: "오늘은 양자리에게 새로운 시작의 날입니다.".into(),
            },
            SourceResult {
                source: "싱글즈 코리아".into(),
                text: "인간관계에서 좋은 소식이 있을 것입니다.".into(),
            },
        ],
        sign: ZodiacSign::Aries,
        date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
    }
}

#[tokio::test]
async fn missing_credential_returns_sentinel_without_network_io() {
    // UnconfiguredClient performs no I/O by construction; reaching
    // `complete` would return an error, not the sentinel.
    let out = compose(&request(), SummaryMode::Generative, &UnconfiguredClient).await;
    assert_eq!(out, MSG_NOT_CONFIGURED);
}

#[tokio::test]
async fn empty_bundle_short_circuits_before_the_call() {
    let req = SummaryRequest {
        bundle: vec![],
        ..request()
    };
    // Configured client pointed at a dead endpoint: if the composer tried
    // the call, the result would be the call-failed sentinel instead.
    let client = ClaudeClient::with_endpoint("test-key", "http://127.0.0.1:1/v1/messages");
    let out = claude::compose_generative(&client, &req).await;
    assert_eq!(out, MSG_EMPTY_BUNDLE);
}

#[tokio::test]
async fn successful_call_returns_the_answer_text() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[{"type":"text","text":"전체 운세: 활기찬 하루입니다."}]}"#)
        .create_async()
        .await;

    let client = ClaudeClient::with_endpoint("test-key", format!("{}/v1/messages", server.url()));
    let out = claude::compose_generative(&client, &request()).await;
    assert_eq!(out, "전체 운세: 활기찬 하루입니다.");
    m.assert_async().await;
}

#[tokio::test]
async fn server_error_degrades_to_the_failure_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = ClaudeClient::with_endpoint("test-key", format!("{}/v1/messages", server.url()));
    let out = claude::compose_generative(&client, &request()).await;
    assert_eq!(out, MSG_CALL_FAILED);
}

#[tokio::test]
async fn malformed_body_degrades_to_the_failure_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body(r#"{"unexpected":"shape"}"#)
        .create_async()
        .await;

    let client = ClaudeClient::with_endpoint("test-key", format!("{}/v1/messages", server.url()));
    let out = claude::compose_generative(&client, &request()).await;
    assert_eq!(out, MSG_CALL_FAILED);
}

#[tokio::test]
async fn prompt_carries_all_bundle_entries() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/v1/messages")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("마리끌레어 코리아".to_string()),
            mockito::Matcher::Regex("싱글즈 코리아".to_string()),
            mockito::Matcher::Regex("claude-3-haiku-20240307".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"content":[{"text":"요약"}]}"#)
        .create_async()
        .await;

    let client = ClaudeClient::with_endpoint("test-key", format!("{}/v1/messages", server.url()));
    let out = claude::compose_generative(&client, &request()).await;
    assert_eq!(out, "요약");
    m.assert_async().await;
}

#[tokio::test]
async fn template_mode_is_deterministic_and_client_free() {
    let req = request();
    let a = compose(&req, SummaryMode::Template, &UnconfiguredClient).await;
    let b = compose(&req, SummaryMode::Template, &UnconfiguredClient).await;
    assert_eq!(a, b);
    assert_eq!(a, template::render_detailed(&req));
    assert!(a.contains("🌟 전체 운세"));
}

#[test]
fn configured_flag_tracks_the_credential() {
    assert!(!ClaudeClient::new("").is_configured());
    assert!(!ClaudeClient::new("   ").is_configured());
    assert!(ClaudeClient::new("sk-test").is_configured());
}

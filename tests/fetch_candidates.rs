// Candidate-fallthrough behavior of the HTTP fetcher against a local server.

use horoscope_aggregator::scrape::fetch::{FetchError, HttpFetcher, PageFetcher};

#[tokio::test]
async fn first_success_wins_and_later_candidates_are_untried() {
    let mut server = mockito::Server::new_async().await;

    let failing = server
        .mock("GET", "/broken")
        .with_status(500)
        .create_async()
        .await;
    let serving = server
        .mock("GET", "/horoscope")
        .with_status(200)
        .with_body("<html>염소자리 페이지</html>")
        .create_async()
        .await;
    let untouched = server
        .mock("GET", "/never")
        .with_status(200)
        .with_body("should not be fetched")
        .expect(0)
        .create_async()
        .await;

    let candidates = vec![
        format!("{}/broken", server.url()),
        format!("{}/horoscope", server.url()),
        format!("{}/never", server.url()),
    ];

    let fetcher = HttpFetcher::new().unwrap();
    let body = fetcher.fetch(&candidates).await.unwrap();
    assert!(body.contains("염소자리"));

    failing.assert_async().await;
    serving.assert_async().await;
    untouched.assert_async().await;
}

#[tokio::test]
async fn all_status_failures_report_an_unexpected_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/gone")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let candidates = vec![format!("{}/gone", server.url())];
    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher.fetch(&candidates).await.unwrap_err();
    assert!(matches!(err, FetchError::Unexpected { .. }), "got {err:?}");
}

#[tokio::test]
async fn connection_failures_report_a_network_error() {
    // A closed port: the connection itself fails, not the HTTP exchange.
    let candidates = vec!["http://127.0.0.1:1/unreachable".to_string()];
    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher.fetch(&candidates).await.unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "got {err:?}");
}

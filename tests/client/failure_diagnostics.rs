use std::sync::Arc;
use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use reqwest::Method;
use statboard::{FailureKind, StatClient, StatError};
use url::Url;

use crate::common::{self, API_KEY, RecordingObserver};

#[tokio::test]
async fn status_error_is_observed_once_then_returned() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(502).body("upstream down");
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    let err = client.get("/broken", &[("page", "3")]).await.unwrap_err();
    mock.assert();

    match &err {
        StatError::Status { status, url, body } => {
            assert_eq!(*status, 502);
            assert_eq!(url.path(), "/broken");
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(err.kind(), Some(FailureKind::Status));

    let failures = observer.failures();
    assert_eq!(failures.len(), 1);
    let d = &failures[0];
    assert_eq!(d.url.path(), "/broken");
    assert_eq!(d.url.query(), None);
    assert_eq!(d.method, Method::GET);
    assert_eq!(d.param("page"), Some("3"));
    assert_eq!(d.param("key"), Some("***"));
    assert!(d.message.contains("502"));
    assert_eq!(d.status, Some(502));
    assert_eq!(d.data.as_deref(), Some("upstream down"));
}

#[tokio::test]
async fn empty_error_body_is_not_logged_as_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    let err = client.get("/missing", &[]).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let failures = observer.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status, Some(404));
    assert_eq!(failures[0].data, None);
}

#[tokio::test]
async fn timeout_is_observed_without_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_secs(2)).body("late");
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = StatClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_key(API_KEY)
        .timeout(Duration::from_millis(100))
        .observer(observer.clone())
        .build()
        .unwrap();

    let err = client.get("/slow", &[]).await.unwrap_err();
    assert!(matches!(err, StatError::Timeout { .. }), "got {err:?}");
    assert_eq!(err.kind(), Some(FailureKind::Timeout));
    assert_eq!(err.status(), None);

    let failures = observer.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status, None);
    assert_eq!(failures[0].data, None);
    assert!(!failures[0].message.is_empty());
}

#[tokio::test]
async fn stalled_body_is_observed_with_received_status() {
    let observer = Arc::new(RecordingObserver::default());
    let base = common::stalled_body_url().await;
    let client = StatClient::builder()
        .base_url(Url::parse(&base).unwrap())
        .api_key(API_KEY)
        .timeout(Duration::from_millis(100))
        .observer(observer.clone())
        .build()
        .unwrap();

    let err = client.get("/sales", &[]).await.unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::Timeout), "got {err:?}");
    assert_eq!(err.url().map(Url::path), Some("/sales"));

    let failures = observer.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status, Some(200));
    assert_eq!(failures[0].data, None);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let observer = Arc::new(RecordingObserver::default());
    let base = common::closed_port_url().await;
    let client = common::client_for(&base, &observer);

    let err = client.get("/stocks", &[("dateFrom", "x")]).await.unwrap_err();
    assert!(matches!(err, StatError::Network { .. }), "got {err:?}");
    assert_eq!(err.url().map(Url::path), Some("/stocks"));

    let failures = observer.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].status, None);
    assert_eq!(failures[0].data, None);
    assert_eq!(failures[0].param("dateFrom"), Some("x"));
}

#[tokio::test]
async fn success_is_never_observed_as_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/fine");
        then.status(200).body("{}");
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    client.get("/fine", &[]).await.unwrap();
    client.get("/fine", &[]).await.unwrap();
    assert!(observer.failures().is_empty());
}

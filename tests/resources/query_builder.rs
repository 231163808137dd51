use std::sync::Arc;

use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use serde::Deserialize;
use serde_json::json;
use statboard::{DateRange, Resource, StatError};

use crate::common::{self, API_KEY, RecordingObserver};

#[derive(Debug, Deserialize, PartialEq)]
struct SaleRow {
    id: u64,
    #[serde(rename = "totalPrice")]
    total_price: f64,
}

#[tokio::test]
async fn builder_decodes_typed_rows() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sales")
            .query_param("dateFrom", "2024-01-01")
            .query_param("dateTo", "2024-01-31")
            .query_param("key", API_KEY);
        then.status(200).json_body(json!([
            { "id": 1, "totalPrice": 120.5 },
            { "id": 2, "totalPrice": 80.0 }
        ]));
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    let rows: Vec<SaleRow> = client
        .resource(Resource::Sales)
        .date_from("2024-01-01")
        .date_to("2024-01-31")
        .fetch_json()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        rows,
        vec![
            SaleRow { id: 1, total_price: 120.5 },
            SaleRow { id: 2, total_price: 80.0 },
        ]
    );
}

#[tokio::test]
async fn builder_accepts_calendar_dates() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/orders")
            .query_param("dateFrom", "2024-05-01")
            .query_param("dateTo", "2024-05-07");
        then.status(200).body("[]");
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    let range = DateRange::from_dates(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
    );
    let resp = client.resource(Resource::Orders).range(range).fetch().await.unwrap();

    mock.assert();
    assert_eq!(resp.body, "[]");
}

#[tokio::test]
async fn unset_bounds_are_sent_empty() {
    let observer = Arc::new(RecordingObserver::default());
    let (base, line) = common::capture_request_line().await;
    let client = common::client_for(&base, &observer);

    client
        .resource(Resource::Incomes)
        .date_from("2024-01-01")
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        line.await.unwrap(),
        "GET /incomes?dateFrom=2024-01-01&dateTo=&key=test-key HTTP/1.1"
    );
}

#[tokio::test]
async fn undecodable_body_is_a_json_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stocks");
        then.status(200).body("<html>maintenance</html>");
    });

    let observer = Arc::new(RecordingObserver::default());
    let client = common::client_for(&server.base_url(), &observer);

    let err = client
        .resource(Resource::Stocks)
        .range(("2024-01-01", "2024-01-02"))
        .fetch_json::<serde_json::Value>()
        .await
        .unwrap_err();

    assert!(matches!(err, StatError::Json(_)), "got {err:?}");
    assert_eq!(err.kind(), None);
    // the request itself succeeded, so nothing was reported as a failure
    assert!(observer.failures().is_empty());
    assert_eq!(observer.payloads().len(), 1);
}

//! Integration tests for client-side aggregation of paginated listings.

use serde_json::{json, Value};
use volttime_api::rest::{PaginationParams, TransactionParams};
use volttime_api::{ApiErrorKind, ApiKey, BaseUrl, VoltTimeClient, VoltTimeConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> VoltTimeClient {
    let config = VoltTimeConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    VoltTimeClient::new(&config).unwrap()
}

fn transaction_json(id: u64) -> Value {
    json!({
        "id": id,
        "charger_id": 3,
        "charger_connector_id": 1,
        "id_tag": "04A2B3C4D5",
        "meter_start": 0,
        "total_kwh": "0.00",
        "start_cost": "0.00",
        "kwh_cost": "0.29",
        "started_at": "2024-05-01T18:00:00Z",
        "created_at": "2024-05-01T18:00:00Z",
        "updated_at": "2024-05-01T18:00:00Z"
    })
}

fn site_json(id: u64) -> Value {
    json!({
        "uuid": format!("site-{id}"),
        "id": id,
        "name": "Depot",
        "street": "Havenweg",
        "postal_code": "3011 AA",
        "house_number": 1,
        "city": "Rotterdam",
        "country": "NL",
        "created_at": "2023-01-10T09:00:00Z",
        "updated_at": "2023-01-10T09:00:00Z"
    })
}

fn charger_json(id: u64) -> Value {
    json!({
        "uuid": format!("charger-{id}"),
        "id": id,
        "identity": format!("EVB-{id}"),
        "connection_status": "connected",
        "setup_completed": true,
        "created_at": "2023-03-01T12:00:00Z",
        "updated_at": "2023-03-01T12:00:00Z"
    })
}

fn page_json(items: Vec<Value>, current: u32, per_page: u32, total: Option<u32>) -> Value {
    let mut meta = json!({"current_page": current, "per_page": per_page});
    if let Some(total) = total {
        meta["total_pages"] = json!(total);
    }
    json!({"data": items, "links": {}, "meta": meta})
}

async fn mount_page(server: &MockServer, route: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn page_numbers(requests: &[wiremock::Request]) -> Vec<String> {
    requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default()
        })
        .collect()
}

// ============================================================================
// Transactions
// ============================================================================

#[tokio::test]
async fn test_all_transactions_walks_every_page_in_order() {
    let server = MockServer::start().await;
    let route = "/sites/abc/transactions";
    for page in 1..=3u32 {
        let first_id = u64::from(page) * 10;
        mount_page(
            &server,
            route,
            page,
            page_json(
                vec![transaction_json(first_id), transaction_json(first_id + 1)],
                page,
                2,
                Some(3),
            ),
        )
        .await;
    }

    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", Some(TransactionParams::new().per_page(2)))
        .await
        .unwrap();

    let ids: Vec<u64> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![10, 11, 20, 21, 30, 31]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(page_numbers(&requests), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_default_page_size_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/abc/transactions"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![transaction_json(1)],
            1,
            100,
            Some(1),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", None)
        .await
        .unwrap();

    assert_eq!(transactions.len(), 1);
}

#[tokio::test]
async fn test_filters_are_sent_with_every_page() {
    let server = MockServer::start().await;
    for page in 1..=2u32 {
        Mock::given(method("GET"))
            .and(path("/sites/abc/transactions"))
            .and(query_param("page", page.to_string()))
            .and(query_param("from", "2024-05-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
                vec![transaction_json(u64::from(page))],
                page,
                1,
                Some(2),
            )))
            .expect(1)
            .mount(&server)
            .await;
    }

    let params = TransactionParams::new()
        .per_page(1)
        .page(7)
        .filter("from", "2024-05-01");
    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", Some(params))
        .await
        .unwrap();

    // The caller's page is ignored; aggregation always starts at 1
    assert_eq!(transactions.len(), 2);
}

#[tokio::test]
async fn test_missing_total_pages_stops_after_first_page() {
    let server = MockServer::start().await;
    let mut body = page_json(vec![transaction_json(1), transaction_json(2)], 1, 2, None);
    body["links"] = json!({"next": format!("{}/sites/abc/transactions?page=2", server.uri())});
    Mock::given(method("GET"))
        .and(path("/sites/abc/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", None)
        .await
        .unwrap();

    assert_eq!(transactions.len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_listing_without_meta_stops_after_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/abc/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [transaction_json(1), transaction_json(2)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", None)
        .await
        .unwrap();

    let ids: Vec<u64> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_zero_page_size_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![site_json(1)],
            1,
            100,
            Some(1),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let params = PaginationParams {
        page: None,
        per_page: Some(0),
    };
    let sites = client_for(&server).get_all_sites(params).await.unwrap();

    assert_eq!(sites.len(), 1);
}

#[tokio::test]
async fn test_empty_listing_makes_one_request() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/sites/abc/transactions",
        1,
        page_json(vec![], 1, 100, Some(0)),
    )
    .await;

    let transactions = client_for(&server)
        .get_all_transactions_by_site("abc", None)
        .await
        .unwrap();

    assert!(transactions.is_empty());
}

#[tokio::test]
async fn test_failing_page_aborts_without_partial_result() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/sites/abc/transactions",
        1,
        page_json(vec![transaction_json(1)], 1, 1, Some(3)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/sites/abc/transactions"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Server Error"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_all_transactions_by_site("abc", Some(TransactionParams::new().per_page(1)))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ApiErrorKind::Response);
    assert_eq!(error.status_code, Some(500));
    assert_eq!(error.message, "Server Error");

    // Page 3 is never requested
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

// ============================================================================
// Sites and chargers
// ============================================================================

#[tokio::test]
async fn test_all_sites_concatenates_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/sites",
        1,
        page_json(vec![site_json(1), site_json(2)], 1, 2, Some(2)),
    )
    .await;
    mount_page(&server, "/sites", 2, page_json(vec![site_json(3)], 2, 2, Some(2))).await;

    let sites = client_for(&server)
        .get_all_sites(PaginationParams::new().per_page(2))
        .await
        .unwrap();

    let uuids: Vec<&str> = sites.iter().map(|s| s.uuid.as_str()).collect();
    assert_eq!(uuids, vec!["site-1", "site-2", "site-3"]);
}

#[tokio::test]
async fn test_all_chargers_concatenates_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/chargers",
        1,
        page_json(vec![charger_json(1)], 1, 1, Some(2)),
    )
    .await;
    mount_page(
        &server,
        "/chargers",
        2,
        page_json(vec![charger_json(2)], 2, 1, Some(2)),
    )
    .await;

    let chargers = client_for(&server)
        .get_all_chargers(PaginationParams::new().per_page(1))
        .await
        .unwrap();

    assert_eq!(chargers.len(), 2);
    assert_eq!(chargers[1].identity, "EVB-2");
}

//! Integration tests for the backend API client against a mock server.

use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use etfdesk::api::{ApiClient, ApiError};
use etfdesk::session::Session;
use etfdesk::types::AccountId;

fn session() -> Session {
    Session::new("test-token", "operator")
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_string_contains("username=operator"))
        .and(body_string_contains("password=hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-abc",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let token = client.login("operator", "hunter2").await.unwrap();
    assert_eq!(token.access_token, "tok-abc");
}

#[tokio::test]
async fn bearer_token_is_attached_to_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trading-account"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "account_number": "12345678-01",
            "is_active": true,
            "created_at": "2026-08-01T09:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_session(&server.uri(), session()).unwrap();
    let accounts = client.trading_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "12345678-01");
}

#[tokio::test]
async fn unauthorized_response_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_session(&server.uri(), session()).unwrap();
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn backend_detail_field_is_surfaced_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/order"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "Failed to place order: insufficient balance"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_session(&server.uri(), session()).unwrap();
    let err = client
        .create_order(&etfdesk::api::types::OrderCreate {
            trading_account_id: 1,
            symbol: "069500".to_string(),
            order_type: "BUY".to_string(),
            order_method: "MARKET".to_string(),
            quantity: 10,
            price: None,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Backend { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Failed to place order: insufficient balance");
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn balance_records_convert_to_holdings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/balance"))
        .and(query_param("trading_account_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "symbol": "069500",
                "quantity": 10,
                "average_price": 100.0,
                "current_price": 110.0,
                "total_value": 1100.0,
                "profit_loss": 100.0,
                "profit_loss_rate": 10.0
            },
            {
                "symbol": "229200",
                "quantity": 5,
                "average_price": 200.0,
                "current_price": null,
                "total_value": null,
                "profit_loss": null,
                "profit_loss_rate": null
            }
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::with_session(&server.uri(), session()).unwrap();
    let records = client.balances(AccountId(3)).await.unwrap();
    assert_eq!(records.len(), 2);

    let holdings: Vec<etfdesk::portfolio::Holding> =
        records.into_iter().map(Into::into).collect();
    assert_eq!(holdings[0].symbol, "069500");
    assert_eq!(holdings[0].total_value(), rust_decimal_macros::dec!(1100));
    // Missing current price degrades to zero rather than failing
    assert!(holdings[1].current_price.is_zero());
}

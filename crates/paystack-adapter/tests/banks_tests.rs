/*
[INPUT]:  Mock HTTP responses for bank endpoints
[OUTPUT]: Test results for BanksApi through the facade
[POS]:    Integration tests - Banks resource
[UPDATE]: When bank endpoints or query parameters change
*/

mod common;

use common::{client_for, envelope, setup_mock_server};
use paystack_adapter::{
    BanksApi, CancellationToken, ErrorKind, ListBanksRequest, ResolveAccountRequest,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_resolve_account() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/bank/resolve"))
        .and(query_param("account_number", "0022728151"))
        .and(query_param("bank_code", "063"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Account number resolved",
            json!({
                "account_number": "0022728151",
                "account_name": "WES GIBBONS",
                "bank_id": 9
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(
        client
            .banks()
            .resolve_account(
                &ResolveAccountRequest::new("0022728151", "063"),
                &CancellationToken::new(),
            )
            .await
    );

    assert!(response.is_success());
    assert_eq!(response.message, "Account number resolved");
    let account = assert_ok!(response.into_data());
    assert_eq!(account.account_number, "0022728151");
    assert_eq!(account.account_name, "WES GIBBONS");
    assert_eq!(account.bank_id, 9);
}

#[tokio::test]
async fn test_resolve_account_requires_both_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let err = assert_err!(
        client
            .banks()
            .resolve_account(&ResolveAccountRequest::new("", "063"), &cancel)
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = assert_err!(
        client
            .banks()
            .resolve_account(&ResolveAccountRequest::new("0022728151", "  "), &cancel)
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[tokio::test]
async fn test_list_banks_with_filters() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/bank"))
        .and(query_param("country", "ghana"))
        .and(query_param("use_cursor", "true"))
        .and(query_param("perPage", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Banks retrieved",
            "data": [
                {
                    "id": 28,
                    "name": "Absa Bank Ghana Ltd",
                    "slug": "absa-bank-ghana-ltd",
                    "code": "030100",
                    "longcode": "030100",
                    "gateway": null,
                    "pay_with_bank": false,
                    "active": true,
                    "country": "Ghana",
                    "currency": "GHS",
                    "type": "ghipss",
                    "is_deleted": false,
                    "createdAt": "2019-08-21T09:52:07.000Z",
                    "updatedAt": "2022-05-31T06:50:27.000Z"
                }
            ],
            "meta": {
                "total": 1,
                "skipped": 0,
                "perPage": 10,
                "page": 1,
                "pageCount": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListBanksRequest {
        country: Some("ghana".into()),
        use_cursor: true,
        per_page: 10,
    };
    let response = assert_ok!(
        client
            .banks()
            .list_banks(&request, &CancellationToken::new())
            .await
    );

    let meta = response.meta.clone().expect("meta");
    assert_eq!(meta.per_page, 10);
    assert!(!meta.has_next_page());

    let banks = assert_ok!(response.into_data());
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].code, "030100");
    assert_eq!(banks[0].bank_type.as_deref(), Some("ghipss"));
    assert!(banks[0].created_at.is_some());
}

#[tokio::test]
async fn test_list_banks_defaults_send_no_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/bank"))
        .and(|req: &wiremock::Request| req.url.query().is_none())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("Banks retrieved", json!([]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = assert_ok!(
        client_for(&server)
            .banks()
            .list_banks(&ListBanksRequest::default(), &CancellationToken::new())
            .await
    );
    assert_eq!(assert_ok!(response.into_data()).len(), 0);
}

#[tokio::test]
async fn test_list_banks_rejects_page_size_before_sending() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = ListBanksRequest {
        per_page: 101,
        ..ListBanksRequest::default()
    };
    let err = assert_err!(
        client_for(&server)
            .banks()
            .list_banks(&request, &CancellationToken::new())
            .await
    );
    assert!(err.is_argument_error());
}

#[tokio::test]
async fn test_invalid_key_surfaces_as_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/bank/resolve"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": false,
            "message": "Invalid key"
        })))
        .mount(&server)
        .await;

    let err = assert_err!(
        client_for(&server)
            .banks()
            .resolve_account(
                &ResolveAccountRequest::new("0022728151", "063"),
                &CancellationToken::new(),
            )
            .await
    );
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.to_string(), "API error (status 401): Invalid key");
}

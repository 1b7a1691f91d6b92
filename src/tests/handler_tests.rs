use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::region_code::RegionCode;
use crate::api::{router, NUMBER_LOOKUP_ENDPOINT};

/// Percent-encodes the few characters phone numbers carry in tests.
fn encode(value: &str) -> String {
    value.replace('+', "%2B").replace(' ', "%20")
}

async fn call(method: Method, params: &[(&str, &str)]) -> (StatusCode, Value) {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(method)
        .uri(format!("{NUMBER_LOOKUP_ENDPOINT}?{query}"))
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn method_not_allowed() {
    let (status, body) = call(Method::POST, &[("phoneNumber", "+12125690123")]).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn international_number() {
    let (status, body) = call(Method::GET, &[("phoneNumber", "+12125690123")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "+12125690123",
            "countryCode": RegionCode::us(),
            "areaCode": "212",
            "localPhoneNumber": "5690123",
        })
    );
}

#[tokio::test]
async fn international_number_with_white_spaces() {
    let (status, body) = call(Method::GET, &[("phoneNumber", "+1 212 5690123")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "+1 212 5690123",
            "countryCode": RegionCode::us(),
            "areaCode": "212",
            "localPhoneNumber": "5690123",
        })
    );
}

#[tokio::test]
async fn national_number_with_country_code() {
    let (status, body) = call(
        Method::GET,
        &[("phoneNumber", "2125690123"), ("countryCode", RegionCode::us())],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "2125690123",
            "countryCode": RegionCode::us(),
            "areaCode": "212",
            "localPhoneNumber": "5690123",
        })
    );
}

#[tokio::test]
async fn missing_phone_number() {
    for params in [
        &[("phoneNumber", ""), ("countryCode", RegionCode::us())][..],
        &[][..],
    ] {
        let (status, body) = call(Method::GET, params).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": { "phoneNumber": "required value is missing" } }));
    }
}

#[tokio::test]
async fn missing_country_code() {
    for number in ["2125690123", "631 311 8150"] {
        let (status, body) =
            call(Method::GET, &[("phoneNumber", number), ("countryCode", "")]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "phoneNumber": number,
                "error": { "countryCode": "required value is missing" },
            })
        );
    }
}

#[tokio::test]
async fn invalid_phone_number() {
    for number in ["+1212569ABCD", "+1 212 569 0123"] {
        let (status, body) = call(Method::GET, &[("phoneNumber", number)]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "phoneNumber": number,
                "error": { "phoneNumber": "invalid phone number" },
            })
        );
    }
}

#[tokio::test]
async fn invalid_combination() {
    let (status, body) = call(
        Method::GET,
        &[("phoneNumber", "+12125690123"), ("countryCode", RegionCode::ca())],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "+12125690123",
            "countryCode": RegionCode::ca(),
            "error": { "countryCode": "invalid combination of phone number and country code" },
        })
    );
}

#[tokio::test]
async fn unknown_country_code() {
    let (status, body) = call(
        Method::GET,
        &[("phoneNumber", "+12125690123"), ("countryCode", "XX")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "+12125690123",
            "countryCode": "XX",
            "error": { "countryCode": "invalid combination of phone number and country code" },
        })
    );

    let (status, body) = call(
        Method::GET,
        &[("phoneNumber", "2125690123"), ("countryCode", "XX")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "2125690123",
            "error": { "phoneNumber": "invalid country code" },
        })
    );
}

#[tokio::test]
async fn italian_number_with_country_code() {
    let (status, body) = call(
        Method::GET,
        &[("phoneNumber", "+39 02 36618300"), ("countryCode", RegionCode::it())],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "phoneNumber": "+39 02 36618300",
            "countryCode": RegionCode::it(),
            "areaCode": "02",
            "localPhoneNumber": "36618300",
        })
    );
}

#[tokio::test]
async fn head_is_served_like_get_without_body() {
    let request = Request::builder()
        .method(Method::HEAD)
        .uri(format!("{NUMBER_LOOKUP_ENDPOINT}?phoneNumber=%2B12125690123"))
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn engine_errors_are_reported_on_phone_number() {
    let (status, body) = call(Method::GET, &[("phoneNumber", "+1212569012")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["phoneNumber"], "+1212569012");
    assert!(body["error"]["phoneNumber"].is_string());
    assert!(body["error"].get("countryCode").is_none());
}

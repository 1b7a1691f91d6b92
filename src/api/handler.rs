use axum::{extract::Query, http::StatusCode, Json};
use log::info;
use serde::Serialize;

use super::query::NumberLookupRequest;
use crate::number::{self, LookupError, MissingValueError, NumberInfo, ParseError};

/// Body of every response of the number lookup endpoint.
///
/// The number information is flattened into the top level object; `error`
/// mirrors its field names with a message about each offending field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLookupResponse {
    #[serde(flatten)]
    pub info: NumberInfo,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub err: Option<NumberInfo>,
}

pub type NumberLookupReply = (StatusCode, Json<NumberLookupResponse>);

/// Looks up the phone number given in the query string.
///
/// Return codes:
/// - 200: valid `phoneNumber` (and `countryCode`, when given) with the number
///   information in the body.
/// - 400: missing or invalid phone number, or an invalid combination of
///   phone number and country code.
///
/// ```text
/// phoneNumber=+1 212 5690123
/// 200 {"phoneNumber":"+1 212 5690123","countryCode":"US","areaCode":"212","localPhoneNumber":"5690123"}
///
/// phoneNumber=2125690123
/// 400 {"phoneNumber":"2125690123","error":{"countryCode":"required value is missing"}}
///
/// phoneNumber=+12125690123&countryCode=CA
/// 400 {"phoneNumber":"+12125690123","countryCode":"CA","error":{"countryCode":"invalid combination of phone number and country code"}}
/// ```
pub async fn number_lookup_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> NumberLookupReply {
    info!("received GET request: {pairs:?}");
    let request = NumberLookupRequest::from_pairs(pairs);
    let (status, response) = lookup(&request);
    (status, Json(response))
}

/// Any method other than GET.
pub async fn method_not_allowed() -> NumberLookupReply {
    (StatusCode::METHOD_NOT_ALLOWED, Json(NumberLookupResponse::default()))
}

pub fn lookup(request: &NumberLookupRequest) -> (StatusCode, NumberLookupResponse) {
    let phone_number = request.phone_number.as_str();
    let country_code = request.country_code.as_str();

    if phone_number.is_empty() {
        let response = NumberLookupResponse {
            err: Some(NumberInfo::with_phone_number(MissingValueError.to_string())),
            ..Default::default()
        };
        return (StatusCode::BAD_REQUEST, response);
    }

    match number::lookup_number(phone_number, country_code) {
        Ok(info) => (StatusCode::OK, NumberLookupResponse { info, err: None }),
        Err(err) => (StatusCode::BAD_REQUEST, error_response(phone_number, country_code, err)),
    }
}

fn error_response(phone_number: &str, country_code: &str, err: LookupError) -> NumberLookupResponse {
    let mut info = NumberInfo::with_phone_number(phone_number);
    let err = match err {
        LookupError::Parse(ParseError::InvalidCountryCode) if country_code.is_empty() => {
            NumberInfo::with_region_code(MissingValueError.to_string())
        }
        err @ LookupError::InvalidCombination { .. } => {
            info.region_code = Some(country_code.to_owned());
            NumberInfo::with_region_code(err.to_string())
        }
        err => NumberInfo::with_phone_number(err.to_string()),
    };
    NumberLookupResponse { info, err: Some(err) }
}

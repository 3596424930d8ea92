// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::api::{ApiError, http_rejection, transactions_from_envelope};
use rust_decimal::Decimal;

#[test]
fn decodes_a_success_envelope() {
    let body = r#"{
        "statusCode": 0,
        "message": "ok",
        "data": [
            {"id": 1, "date": "2025-11-01", "category": "급여", "description": "월급", "amount": 3000000},
            {"id": 2, "date": "2025-11-03", "category": "간식", "description": "커피", "amount": -2100}
        ]
    }"#;
    let transactions = transactions_from_envelope(body).unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].date.to_string(), "2025-11-01");
    assert_eq!(transactions[1].amount, Decimal::from(-2_100));
}

#[test]
fn skips_malformed_records_instead_of_failing() {
    let body = r#"{
        "statusCode": 0,
        "data": [
            {"id": 1, "date": "2025-11-01", "category": "급여", "description": "월급", "amount": 3000000},
            {"id": 2, "date": "not-a-date", "category": "간식", "description": "커피", "amount": -2100},
            {"id": 3, "date": "2025-11-04", "category": "식비", "description": "점심"}
        ]
    }"#;
    let transactions = transactions_from_envelope(body).unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, 1);
}

#[test]
fn non_zero_status_surfaces_the_server_message() {
    let body = r#"{"statusCode": 401, "message": "로그인이 필요합니다."}"#;
    match transactions_from_envelope(body) {
        Err(ApiError::Rejected { code, message }) => {
            assert_eq!(code, 401);
            assert_eq!(message, "로그인이 필요합니다.");
        }
        other => panic!("expected Rejected, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn missing_data_payload_is_an_error() {
    let body = r#"{"statusCode": 0, "message": "ok"}"#;
    assert!(matches!(
        transactions_from_envelope(body),
        Err(ApiError::MissingData)
    ));
}

#[test]
fn http_failures_keep_the_server_message() {
    let body = r#"{"statusCode": 401, "message": "로그인이 필요합니다."}"#;
    match http_rejection(401, body) {
        ApiError::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "로그인이 필요합니다.");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[test]
fn http_failures_without_an_envelope_get_a_generic_message() {
    match http_rejection(502, "<html>bad gateway</html>") {
        ApiError::Http { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "request failed");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[test]
fn garbage_body_is_a_decode_error() {
    assert!(matches!(
        transactions_from_envelope("<html>gateway timeout</html>"),
        Err(ApiError::Decode(_))
    ));
}

//! Integration tests for the client credential check.
//!
//! These tests require:
//! - The api server running (cargo run -p compas-olfactif-api)
//! - `TEST_CLIENT_EMAIL` / `TEST_CLIENT_PASSWORD` set to an existing
//!   client account of the test provider project
//!
//! Run with: cargo test -p compas-olfactif-integration-tests -- --ignored

use compas_olfactif_integration_tests::{api_base_url, require_env};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running api server and provider credentials"]
async fn test_wrong_password_yields_null() {
    let email = require_env("TEST_CLIENT_EMAIL");

    let resp = Client::new()
        .post(format!("{}/api/client/verify-credentials", api_base_url()))
        .json(&json!({ "email": email, "password": "definitely-wrong" }))
        .send()
        .await
        .expect("request failed");

    // Wrong credentials are not an error: 200 with a JSON null
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("invalid JSON body");
    assert!(body.is_null());
}

#[tokio::test]
#[ignore = "Requires running api server and provider credentials"]
async fn test_valid_credentials_yield_record() {
    let email = require_env("TEST_CLIENT_EMAIL");
    let password = require_env("TEST_CLIENT_PASSWORD");

    let resp = Client::new()
        .post(format!("{}/api/client/verify-credentials", api_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("invalid JSON body");
    assert_eq!(body["email"], email.as_str());
    assert!(body["user_id"].is_string());
    // profile and code_client may be null, but the keys are present
    assert!(body.get("profile").is_some());
    assert!(body.get("code_client").is_some());
}

#[tokio::test]
#[ignore = "Requires running api server and provider credentials"]
async fn test_missing_password_is_400() {
    let resp = Client::new()
        .post(format!("{}/api/client/verify-credentials", api_base_url()))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

use feedbackz_client::types::{LoginRequest, RegisterRequest};
use feedbackz_client::{ApiClient, ApiConfig, Feedbackz};
use httpmock::prelude::*;
use serde_json::json;

fn api_for(server: &MockServer) -> (ApiClient, Feedbackz) {
    let client = ApiClient::new(ApiConfig::new(server.base_url())).unwrap();
    let api = Feedbackz::new(client.clone());
    (client, api)
}

fn user_fixture() -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Ana",
        "email": "ana@example.com",
        "description": "engineer",
        "coins": 120,
        "role": "USER"
    })
}

#[tokio::test]
async fn login_stores_token_for_subsequent_calls() {
    let server = MockServer::start();

    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .header("Content-Type", "application/json")
            .json_body(json!({ "email": "ana@example.com", "password": "secret" }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": { "user": user_fixture(), "token": "tok-1" } }));
    });
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/profile")
            .header("Authorization", "Bearer tok-1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": user_fixture() }));
    });

    let (client, api) = api_for(&server);
    assert!(client.token().is_none());

    let session = api
        .auth
        .login(&LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.data.token, "tok-1");
    assert_eq!(client.token().as_deref(), Some("tok-1"));

    let me = api.auth.profile().await.unwrap();
    assert_eq!(me.data.email, "ana@example.com");

    login.assert();
    profile.assert();
}

#[tokio::test]
async fn register_stores_token() {
    let server = MockServer::start();

    let register = server.mock(|when, then| {
        when.method(POST).path("/auth/register").json_body(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secret",
            "description": "engineer"
        }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": { "user": user_fixture(), "token": "tok-new" } }));
    });

    let (client, api) = api_for(&server);
    api.auth
        .register(&RegisterRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            description: "engineer".to_string(),
            group_id: None,
        })
        .await
        .unwrap();

    assert_eq!(client.token().as_deref(), Some("tok-new"));

    register.assert();
}

#[tokio::test]
async fn refresh_replaces_the_stored_token() {
    let server = MockServer::start();

    let refresh = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/refresh")
            .header("Authorization", "Bearer tok-old");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": { "token": "tok-fresh" } }));
    });

    let (client, api) = api_for(&server);
    client.set_token(Some("tok-old".to_string()));

    let refreshed = api.auth.refresh_token().await.unwrap();

    assert_eq!(refreshed.data.token, "tok-fresh");
    assert_eq!(client.token().as_deref(), Some("tok-fresh"));

    refresh.assert();
}

#[tokio::test]
async fn logout_clears_the_token_on_success() {
    let server = MockServer::start();

    let logout = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/logout")
            .header("Authorization", "Bearer tok-1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "message": "logged out" }));
    });

    let (client, api) = api_for(&server);
    client.set_token(Some("tok-1".to_string()));

    let response = api.auth.logout().await.unwrap();

    assert_eq!(response.data.message, "logged out");
    assert!(client.token().is_none());

    logout.assert();
}

#[tokio::test]
async fn logout_clears_the_token_when_the_server_errors() {
    let server = MockServer::start();

    let logout = server.mock(|when, then| {
        when.method(POST).path("/auth/logout");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(json!({ "message": "session store unavailable" }));
    });

    let (client, api) = api_for(&server);
    client.set_token(Some("tok-1".to_string()));

    let err = api.auth.logout().await.unwrap_err();

    assert_eq!(err.status(), 500);
    // A failed logout must not leak a stale session.
    assert!(client.token().is_none());

    logout.assert();
}

#[tokio::test]
async fn logout_clears_the_token_when_the_server_is_unreachable() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9")).unwrap();
    let api = Feedbackz::new(client.clone());
    client.set_token(Some("tok-1".to_string()));

    let err = api.auth.logout().await.unwrap_err();

    assert_eq!(err.status(), 0);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn rehydrated_token_authenticates_calls() {
    let server = MockServer::start();

    let coins = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/coins")
            .header("Authorization", "Bearer persisted-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": { "coins": 75 } }));
    });

    let (_, api) = api_for(&server);
    api.auth.set_token(Some("persisted-token".to_string()));

    let balance = api.auth.coins().await.unwrap();
    assert_eq!(balance.data.coins, 75);

    coins.assert();
}

#[tokio::test]
async fn verify_token_reports_validity() {
    let server = MockServer::start();

    let verify = server.mock(|when, then| {
        when.method(GET).path("/auth/verify-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "data": { "valid": true } }));
    });

    let (_, api) = api_for(&server);
    let validity = api.auth.verify_token().await.unwrap();
    assert!(validity.data.valid);

    verify.assert();
}

#[tokio::test]
async fn forgot_and_reset_password_post_expected_bodies() {
    let server = MockServer::start();

    let forgot = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/forgot-password")
            .json_body(json!({ "email": "ana@example.com" }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "message": "reset mail sent" }));
    });
    let reset = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/reset-password")
            .json_body(json!({ "token": "reset-tok", "password": "n3w" }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "message": "password updated" }));
    });

    let (_, api) = api_for(&server);
    api.auth.forgot_password("ana@example.com").await.unwrap();
    let response = api.auth.reset_password("reset-tok", "n3w").await.unwrap();
    assert_eq!(response.data.message, "password updated");

    forgot.assert();
    reset.assert();
}

//! Integration tests for login and bearer-token handling.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use docesabor_auth::{Claims, JwtEncoder};
use docesabor_entity::account::Role;

#[tokio::test]
async fn test_root_and_health() {
    let app = helpers::TestApp::new();

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body, "API: Doce Sabor");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "up");
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    let id = app.create_account("Maria", Role::Client).await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "MARIA@email.com ", "senha": helpers::PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.to_string());
    assert_eq!(response.body["tipo"], "CLIENT");
    assert!(response.body["token"].as_str().is_some());
    assert!(!response.body.to_string().contains("argon2"));
}

#[tokio::test]
async fn test_legacy_login_routes() {
    let app = helpers::TestApp::new();
    app.create_account("Paulo", Role::Employee).await;

    for path in ["/clientes/login", "/funcionarios/login", "/admins/login"] {
        let response = app
            .request(
                "POST",
                path,
                Some(json!({ "email": "paulo@email.com", "senha": helpers::PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.body["tipo"], "EMPLOYEE");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.create_account("Maria", Role::Client).await;

    let attempts = [
        json!({ "email": "maria@email.com", "senha": "Wrong#Pass1" }),
        json!({ "email": "ninguem@email.com", "senha": helpers::PASSWORD }),
        json!({ "email": "maria@email.com" }),
        json!({}),
    ];

    for body in attempts {
        let response = app.request("POST", "/login", Some(body.clone()), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body, json!({ "erro": "Invalid e-mail or password" }));
    }
}

#[tokio::test]
async fn test_failed_login_is_audited() {
    let app = helpers::TestApp::new();
    app.create_account("Maria", Role::Client).await;
    let (_, admin) = app.account_with_token("Ana", Role::Admin).await;

    app.request(
        "POST",
        "/login",
        Some(json!({ "email": "maria@email.com", "senha": "Wrong#Pass1" })),
        None,
    )
    .await;
    helpers::settle().await;

    let logs = app.request("GET", "/logs", None, Some(&admin)).await;
    assert_eq!(logs.status, StatusCode::OK);
    let entries = logs.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["descricao"], "Failed login attempt");
}

#[tokio::test]
async fn test_missing_token_is_401() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/pedidos", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["erro"], "Authentication required");
}

#[tokio::test]
async fn test_malformed_and_tampered_tokens_are_401() {
    let app = helpers::TestApp::new();
    let (_, token) = app.account_with_token("Ana", Role::Admin).await;

    let garbage = app.request("GET", "/pedidos", None, Some("not-a-jwt")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["erro"], "Authentication required");

    let signature_start = token.rfind('.').unwrap() + 1;
    let mut tampered: Vec<char> = token.chars().collect();
    let target = signature_start + 10;
    tampered[target] = if tampered[target] == 'x' { 'y' } else { 'x' };
    let tampered: String = tampered.into_iter().collect();
    let response = app.request("GET", "/pedidos", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, garbage.body);
}

#[tokio::test]
async fn test_missing_and_invalid_tokens_look_the_same() {
    let app = helpers::TestApp::new();

    let missing = app.request("GET", "/pedidos", None, None).await;
    let invalid = app.request("GET", "/pedidos", None, Some("not-a-jwt")).await;
    assert_eq!(missing.status, invalid.status);
    assert_eq!(missing.body, invalid.body);

    let wrong_scheme = app
        .send(
            axum::http::Request::builder()
                .method("GET")
                .uri("/pedidos")
                .header("Authorization", "Basic YW5hOnNlbmhh")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_scheme.body, missing.body);
}

#[tokio::test]
async fn test_token_from_another_secret_is_401() {
    let app = helpers::TestApp::new();
    let id = app.create_account("Ana", Role::Admin).await;

    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "someone-else".to_string();
    let token = JwtEncoder::new(&foreign)
        .issue(id, "Ana", Role::Admin)
        .unwrap()
        .token;

    let response = app.request("GET", "/pedidos", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_401() {
    let app = helpers::TestApp::new();
    let id = app.create_account("Ana", Role::Admin).await;

    let now = chrono::Utc::now().timestamp();
    let token = JwtEncoder::new(&app.config.auth)
        .encode_claims(&Claims {
            sub: id,
            name: "Ana".to_string(),
            role: Role::Admin,
            iat: now - 3600,
            exp: now - 1,
        })
        .unwrap();

    let response = app.request("GET", "/pedidos", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["erro"], "Authentication required");
}

#[tokio::test]
async fn test_capabilities_follow_token_role() {
    let app = helpers::TestApp::new();
    let id = app.create_account("Maria", Role::Client).await;

    // Only a holder of the signing secret can mint this.
    let forged = JwtEncoder::new(&app.config.auth)
        .issue(id, "Maria", Role::Admin)
        .unwrap()
        .token;
    let response = app.request("GET", "/pedidos", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::OK);

    let own = app.login("Maria").await;
    let response = app.request("GET", "/pedidos", None, Some(&own)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

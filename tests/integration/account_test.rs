//! Integration tests for registration and account lookup.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use docesabor_entity::account::Role;

fn registration(name: &str, email: &str) -> serde_json::Value {
    json!({ "nome": name, "email": email, "senha": helpers::PASSWORD, "cidade": "Pelotas" })
}

#[tokio::test]
async fn test_client_registration_forces_client_role() {
    let app = helpers::TestApp::new();

    for (path, email) in [("/clientes", "bia@email.com"), ("/usuarios", "caio@email.com")] {
        let mut body = registration("Cliente", email);
        body["tipo"] = json!("ADMIN");

        let response = app.request("POST", path, Some(body), None).await;
        assert_eq!(response.status, StatusCode::CREATED, "{path}: {:?}", response.body);
        assert_eq!(response.body["tipo"], "CLIENT");
        assert_eq!(response.body["email"], email);
        assert!(response.body.get("password_hash").is_none());
        assert!(response.body.get("senha").is_none());
    }
}

#[tokio::test]
async fn test_registered_client_can_login() {
    let app = helpers::TestApp::new();
    app.request(
        "POST",
        "/clientes",
        Some(registration("Beatriz", " Beatriz@Email.com ")),
        None,
    )
    .await;

    let token = app.login("Beatriz").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_weak_password_lists_every_rule() {
    let app = helpers::TestApp::new();
    let mut body = registration("Beatriz", "bia@email.com");
    body["senha"] = json!("abcdefgh");

    let response = app.request("POST", "/clientes", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["erro"],
        json!([
            "Password must contain an uppercase letter",
            "Password must contain a digit",
            "Password must contain a symbol"
        ])
    );
}

#[tokio::test]
async fn test_invalid_fields_are_reported_per_field() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/clientes",
            Some(json!({ "nome": "Jo", "email": "not-an-email", "senha": helpers::PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let issues = response.body["erro"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["campo"], "email");
    assert_eq!(issues[1]["campo"], "name");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/clientes", Some(json!("just a string")), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["erro"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = helpers::TestApp::new();
    app.create_account("Maria", Role::Client).await;

    let response = app
        .request(
            "POST",
            "/clientes",
            Some(registration("Outra Maria", "MARIA@email.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["erro"], "E-mail already in use");
}

#[tokio::test]
async fn test_staff_registration_requires_staff_caller() {
    let app = helpers::TestApp::new();
    let (_, client) = app.account_with_token("Maria", Role::Client).await;
    let body = registration("Paulo", "paulo@email.com");

    let anonymous = app.request("POST", "/funcionarios", Some(body.clone()), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let by_client = app
        .request("POST", "/funcionarios", Some(body), Some(&client))
        .await;
    assert_eq!(by_client.status, StatusCode::FORBIDDEN);
    assert_eq!(by_client.body["erro"], "You are not allowed to perform this action");
}

#[tokio::test]
async fn test_employee_creates_employees_and_admins() {
    let app = helpers::TestApp::new();
    let (_, employee) = app.account_with_token("Paulo", Role::Employee).await;

    let created = app
        .request(
            "POST",
            "/usuarios/funcionarios",
            Some(registration("Joana", "joana@email.com")),
            Some(&employee),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["tipo"], "EMPLOYEE");

    let mut admin_body = registration("Chefe", "chefe@email.com");
    admin_body["tipo"] = json!("ADMIN");
    let promoted = app
        .request("POST", "/funcionarios", Some(admin_body), Some(&employee))
        .await;
    assert_eq!(promoted.status, StatusCode::CREATED);
    assert_eq!(promoted.body["tipo"], "ADMIN");

    let login = app
        .request(
            "POST",
            "/login",
            Some(json!({"email": "chefe@email.com", "senha": helpers::PASSWORD})),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_creates_admin_with_legacy_level() {
    let app = helpers::TestApp::new();
    let (_, admin) = app.account_with_token("Ana", Role::Admin).await;

    let mut body = registration("Chefe", "chefe@email.com");
    body["tipo"] = json!(5);
    let created = app
        .request("POST", "/funcionarios", Some(body), Some(&admin))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["tipo"], "ADMIN");

    let mut client_body = registration("Cliente", "cliente@email.com");
    client_body["tipo"] = json!("CLIENT");
    let rejected = app
        .request("POST", "/funcionarios", Some(client_body), Some(&admin))
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["erro"], "Staff accounts must be EMPLOYEE or ADMIN");

    helpers::settle().await;
    let logs = app.request("GET", "/logs", None, Some(&admin)).await;
    let entries = logs.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["descricao"], "Staff account created");
}

#[tokio::test]
async fn test_unknown_role_label_is_rejected() {
    let app = helpers::TestApp::new();
    let (_, admin) = app.account_with_token("Ana", Role::Admin).await;

    let mut body = registration("Chefe", "chefe@email.com");
    body["tipo"] = json!("SUPERUSER");
    let response = app
        .request("POST", "/funcionarios", Some(body), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listings_are_staff_only_and_filtered() {
    let app = helpers::TestApp::new();
    let (_, client) = app.account_with_token("Maria", Role::Client).await;
    app.create_account("Bia", Role::Client).await;
    let (_, employee) = app.account_with_token("Paulo", Role::Employee).await;
    app.create_account("Ana", Role::Admin).await;

    for path in ["/usuarios", "/clientes", "/funcionarios"] {
        let denied = app.request("GET", path, None, Some(&client)).await;
        assert_eq!(denied.status, StatusCode::FORBIDDEN, "{path}");
    }

    let all = app.request("GET", "/usuarios", None, Some(&employee)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 4);

    let clients = app.request("GET", "/clientes", None, Some(&employee)).await;
    let clients = clients.body.as_array().unwrap();
    assert_eq!(clients.len(), 2);
    assert!(clients.iter().all(|a| a["tipo"] == "CLIENT"));

    let staff = app.request("GET", "/funcionarios", None, Some(&employee)).await;
    let staff = staff.body.as_array().unwrap();
    assert_eq!(staff.len(), 2);
    assert!(staff.iter().all(|a| a["tipo"] != "CLIENT"));
}

#[tokio::test]
async fn test_account_lookup() {
    let app = helpers::TestApp::new();
    let (maria, maria_token) = app.account_with_token("Maria", Role::Client).await;
    let (bia, _) = app.account_with_token("Bia", Role::Client).await;
    let (_, employee) = app.account_with_token("Paulo", Role::Employee).await;

    let own = app
        .request("GET", &format!("/clientes/{maria}"), None, Some(&maria_token))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["nome"], "Maria");

    let other = app
        .request("GET", &format!("/usuarios/{bia}"), None, Some(&maria_token))
        .await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);

    let by_staff = app
        .request("GET", &format!("/funcionarios/{bia}"), None, Some(&employee))
        .await;
    assert_eq!(by_staff.status, StatusCode::OK);

    let missing = app
        .request("GET", &format!("/usuarios/{}", Uuid::new_v4()), None, Some(&employee))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/usuarios/42", None, Some(&employee))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

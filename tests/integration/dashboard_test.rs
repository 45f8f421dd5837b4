//! Integration tests for the dashboard aggregates.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use docesabor_entity::account::Role;

#[tokio::test]
async fn test_dashboard_is_staff_only() {
    let app = helpers::TestApp::new();
    let (_, client) = app.account_with_token("Maria", Role::Client).await;

    for path in [
        "/dashboard/gerais",
        "/dashboard/bolosPorCategoria",
        "/dashboard/clientesCidade",
        "/dashboard/pedidosPorStatus",
    ] {
        let by_client = app.request("GET", path, None, Some(&client)).await;
        assert_eq!(by_client.status, StatusCode::FORBIDDEN, "{path}");

        let anonymous = app.request("GET", path, None, None).await;
        assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_empty_shop() {
    let app = helpers::TestApp::new();
    let (_, admin) = app.account_with_token("Ana", Role::Admin).await;

    let general = app.request("GET", "/dashboard/estatisticas", None, Some(&admin)).await;
    assert_eq!(general.status, StatusCode::OK);
    assert_eq!(general.body, json!({ "clientes": 0, "bolos": 0, "pedidos": 0 }));

    let statuses = app
        .request("GET", "/dashboard/pedidosPorStatus", None, Some(&admin))
        .await;
    assert_eq!(statuses.body, json!([]));
}

#[tokio::test]
async fn test_aggregates() {
    let app = helpers::TestApp::new();
    let (maria, maria_token) = app.account_with_token("Maria", Role::Client).await;
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;

    app.request(
        "POST",
        "/clientes",
        Some(json!({
            "nome": "Beatriz",
            "email": "bia@email.com",
            "senha": helpers::PASSWORD,
            "cidade": "Rio Grande"
        })),
        None,
    )
    .await;
    app.request(
        "POST",
        "/clientes",
        Some(json!({ "nome": "Caio", "email": "caio@email.com", "senha": helpers::PASSWORD })),
        None,
    )
    .await;

    let brigadeiro = app.create_cake(&staff, "Brigadeiro").await;
    let morango = app.create_cake(&staff, "Morango").await;
    let retired = app.create_cake(&staff, "Prestigio").await;
    app.request("DELETE", &format!("/bolos/{retired}"), None, Some(&staff))
        .await;

    let first = app.place_order(maria, brigadeiro, &maria_token).await;
    app.place_order(maria, morango, &maria_token).await;
    app.place_order(maria, morango, &maria_token).await;
    app.set_status(first, "CONFIRMED", &staff).await;

    let general = app.request("GET", "/dashboard/gerais", None, Some(&staff)).await;
    assert_eq!(general.body, json!({ "clientes": 3, "bolos": 2, "pedidos": 3 }));

    let by_category = app
        .request("GET", "/dashboard/bolosCategoria", None, Some(&staff))
        .await;
    assert_eq!(
        by_category.body,
        json!([
            { "categoria": "Categoria Brigadeiro", "num": 1 },
            { "categoria": "Categoria Morango", "num": 1 }
        ])
    );

    let by_city = app
        .request("GET", "/dashboard/clientesCidade", None, Some(&staff))
        .await;
    assert_eq!(
        by_city.body,
        json!([
            { "cidade": "Pelotas", "num": 1 },
            { "cidade": "Rio Grande", "num": 1 }
        ])
    );

    let by_status = app
        .request("GET", "/dashboard/pedidosPorStatus", None, Some(&staff))
        .await;
    assert_eq!(
        by_status.body,
        json!([
            { "status": "PLACED", "num": 2 },
            { "status": "CONFIRMED", "num": 1 }
        ])
    );
}

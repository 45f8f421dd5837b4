//! Integration tests for the category and cake catalog.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use docesabor_entity::account::Role;

async fn category(app: &helpers::TestApp, token: &str, name: &str) -> i64 {
    let response = app
        .request("POST", "/categorias", Some(json!({ "nome": name })), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_i64().unwrap()
}

async fn cake(app: &helpers::TestApp, token: &str, name: &str, price: f64, category_id: i64) -> i64 {
    let response = app
        .request(
            "POST",
            "/bolos",
            Some(helpers::cake_body(name, price, category_id)),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_i64().unwrap()
}

fn names(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|c| c["nome"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_browsing_needs_no_token() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;
    let id = cake(&app, &staff, "Brigadeiro", 50.0, cat).await;

    let categories = app.request("GET", "/categorias", None, None).await;
    assert_eq!(categories.status, StatusCode::OK);
    assert_eq!(categories.body[0]["nome"], "Chocolate");

    let cakes = app.request("GET", "/bolos", None, None).await;
    assert_eq!(names(&cakes.body), vec!["Brigadeiro"]);
    assert_eq!(cakes.body[0]["categoriaNome"], "Chocolate");
    assert_eq!(cakes.body[0]["ativo"], true);

    let one = app.request("GET", &format!("/bolos/{id}"), None, None).await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["preco"], 50.0);
}

#[tokio::test]
async fn test_catalog_mutation_requires_staff() {
    let app = helpers::TestApp::new();
    let (_, client) = app.account_with_token("Maria", Role::Client).await;
    let body = json!({ "nome": "Frutas" });

    let anonymous = app.request("POST", "/categorias", Some(body.clone()), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let by_client = app
        .request("POST", "/categorias", Some(body), Some(&client))
        .await;
    assert_eq!(by_client.status, StatusCode::FORBIDDEN);

    let cake = app
        .request("POST", "/bolos", Some(helpers::cake_body("Bolo", 10.0, 1)), Some(&client))
        .await;
    assert_eq!(cake.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_cake_payload() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;

    let response = app
        .request(
            "POST",
            "/bolos",
            Some(json!({
                "nome": "Bolo",
                "preco": 0,
                "foto": "not a url",
                "ingredientes": "ovos",
                "categoriaId": cat
            })),
            Some(&staff),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["erro"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["campo"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["ingredients", "photo", "price"]);

    let unknown_category = app
        .request("POST", "/bolos", Some(helpers::cake_body("Bolo de Fubá", 30.0, 999)), Some(&staff))
        .await;
    assert_eq!(unknown_category.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deactivate_hides_cake_from_listings() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;
    cake(&app, &staff, "Brigadeiro", 50.0, cat).await;
    let retired = cake(&app, &staff, "Prestigio", 55.0, cat).await;

    let response = app
        .request("DELETE", &format!("/bolos/{retired}"), None, Some(&staff))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ativo"], false);

    let listing = app.request("GET", "/bolos", None, None).await;
    assert_eq!(names(&listing.body), vec!["Brigadeiro"]);

    let history = app.request("GET", &format!("/bolos/{retired}"), None, None).await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body["ativo"], false);

    let missing = app.request("GET", "/bolos/999", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["erro"], "Cake 999 not found");

    let unknown = app.request("DELETE", "/bolos/999", None, Some(&staff)).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    helpers::settle().await;
    let logs = app.request("GET", "/logs", None, Some(&staff)).await;
    assert_eq!(logs.body[0]["descricao"], "Cake deactivated");
}

#[tokio::test]
async fn test_replace_cake() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;
    let id = cake(&app, &staff, "Brigadeiro", 50.0, cat).await;

    let response = app
        .request(
            "PUT",
            &format!("/bolos/{id}"),
            Some(helpers::cake_body("Brigadeiro Branco", 62.5, cat)),
            Some(&staff),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["nome"], "Brigadeiro Branco");
    assert_eq!(response.body["preco"], 62.5);

    let missing = app
        .request("PUT", "/bolos/999", Some(helpers::cake_body("Outro", 10.0, cat)), Some(&staff))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_featured_toggle() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;
    let id = cake(&app, &staff, "Brigadeiro", 50.0, cat).await;
    cake(&app, &staff, "Prestigio", 55.0, cat).await;

    let featured = app.request("GET", "/bolos/destaques", None, None).await;
    assert!(featured.body.as_array().unwrap().is_empty());

    let toggled = app
        .request("PATCH", &format!("/bolos/destacar/{id}"), None, Some(&staff))
        .await;
    assert_eq!(toggled.status, StatusCode::OK);
    assert_eq!(toggled.body["destaque"], true);

    let featured = app.request("GET", "/bolos/destaques", None, None).await;
    assert_eq!(names(&featured.body), vec!["Brigadeiro"]);

    app.request("PATCH", &format!("/bolos/destacar/{id}"), None, Some(&staff))
        .await;
    let featured = app.request("GET", "/bolos/destaques", None, None).await;
    assert!(featured.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recent_cakes_are_limited() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cat = category(&app, &staff, "Chocolate").await;
    let mut last = 0;
    for name in ["Um bolo", "Dois bolos", "Tres bolos", "Quatro bolos", "Cinco bolos"] {
        last = cake(&app, &staff, name, 20.0, cat).await;
    }

    let recent = app.request("GET", "/bolos/recentes", None, None).await;
    let recent = recent.body.as_array().unwrap();
    assert_eq!(recent.len(), app.config.ordering.recent_cakes_limit as usize);
    assert_eq!(recent[0]["id"], last);
}

#[tokio::test]
async fn test_search_by_price_and_text() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let chocolate = category(&app, &staff, "Chocolate").await;
    let fruits = category(&app, &staff, "Frutas").await;
    cake(&app, &staff, "Brigadeiro", 50.0, chocolate).await;
    cake(&app, &staff, "Morango", 35.0, fruits).await;
    cake(&app, &staff, "Floresta Negra", 80.0, chocolate).await;

    let cheap = app.request("GET", "/bolos/pesquisa/50", None, None).await;
    assert_eq!(names(&cheap.body), vec!["Morango", "Brigadeiro"]);

    let by_category = app.request("GET", "/bolos/pesquisa/CHOCO", None, None).await;
    assert_eq!(names(&by_category.body), vec!["Brigadeiro", "Floresta Negra"]);

    let by_name = app.request("GET", "/bolos/pesquisa/moran", None, None).await;
    assert_eq!(names(&by_name.body), vec!["Morango"]);

    let blank = app.request("GET", "/bolos/pesquisa/%20", None, None).await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["erro"], "Search term must not be empty");
}

#[tokio::test]
async fn test_category_replace_and_purge() {
    let app = helpers::TestApp::new();
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let used = category(&app, &staff, "Chocolate").await;
    let empty = category(&app, &staff, "Frutas").await;
    cake(&app, &staff, "Brigadeiro", 50.0, used).await;

    let renamed = app
        .request(
            "PUT",
            &format!("/categorias/{empty}"),
            Some(json!({ "nome": "Frutas Vermelhas" })),
            Some(&staff),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["nome"], "Frutas Vermelhas");

    let short = app
        .request("PUT", &format!("/categorias/{empty}"), Some(json!({ "nome": "Fr" })), Some(&staff))
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let blocked = app
        .request("DELETE", &format!("/categorias/{used}"), None, Some(&staff))
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);

    let removed = app
        .request("DELETE", &format!("/categorias/{empty}"), None, Some(&staff))
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let again = app
        .request("DELETE", &format!("/categorias/{empty}"), None, Some(&staff))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let listing = app.request("GET", "/categorias", None, None).await;
    assert_eq!(names(&listing.body), vec!["Chocolate"]);

    helpers::settle().await;
    let logs = app.request("GET", "/logs", None, Some(&staff)).await;
    let entries = logs.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["descricao"], "Category removed");
}

//! Integration tests for order placement and the status lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use docesabor_entity::account::Role;

struct Shop {
    app: helpers::TestApp,
    client_id: Uuid,
    client: String,
    staff: String,
    cake_id: i64,
}

async fn shop(app: helpers::TestApp) -> Shop {
    let (client_id, client) = app.account_with_token("Maria", Role::Client).await;
    let (_, staff) = app.account_with_token("Paulo", Role::Employee).await;
    let cake_id = app.create_cake(&staff, "Brigadeiro").await;
    Shop {
        app,
        client_id,
        client,
        staff,
        cake_id,
    }
}

impl Shop {
    async fn order(&self) -> i64 {
        self.app
            .place_order(self.client_id, self.cake_id, &self.client)
            .await
    }

    async fn shipped_order(&self) -> i64 {
        let id = self.order().await;
        for status in ["CONFIRMED", "IN_PREPARATION", "SHIPPED"] {
            let response = self.app.set_status(id, status, &self.staff).await;
            assert_eq!(response.status, StatusCode::OK, "{status}: {:?}", response.body);
        }
        id
    }

    async fn status_of(&self, id: i64) -> String {
        let orders = self.app.request("GET", "/pedidos", None, Some(&self.staff)).await;
        orders
            .body
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["id"] == id)
            .map(|o| o["status"].as_str().unwrap().to_string())
            .expect("order not listed")
    }

    async fn transitions_logged(&self) -> usize {
        helpers::settle().await;
        let logs = self.app.request("GET", "/logs", None, Some(&self.staff)).await;
        logs.body
            .as_array()
            .unwrap()
            .iter()
            .filter(|e| e["descricao"] == "Order status changed")
            .count()
    }
}

#[tokio::test]
async fn test_client_places_own_order() {
    let shop = shop(helpers::TestApp::new()).await;

    let response = shop
        .app
        .request(
            "POST",
            "/pedidos",
            Some(json!({
                "clienteId": shop.client_id,
                "boloId": shop.cake_id,
                "quantidade": 2,
                "observacoes": "Sem cobertura, por favor"
            })),
            Some(&shop.client),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "PLACED");
    assert_eq!(response.body["quantidade"], 2);
    assert_eq!(response.body["clienteNome"], "Maria");
    assert_eq!(response.body["boloNome"], "Brigadeiro");
    assert!(!response.body.to_string().contains("maria@email.com"));
}

#[tokio::test]
async fn test_order_placement_rules() {
    let shop = shop(helpers::TestApp::new()).await;
    let (bia, _) = shop.app.account_with_token("Bia", Role::Client).await;
    let body = |customer: Uuid| json!({ "clienteId": customer, "boloId": shop.cake_id });

    let for_someone_else = shop
        .app
        .request("POST", "/pedidos", Some(body(bia)), Some(&shop.client))
        .await;
    assert_eq!(for_someone_else.status, StatusCode::FORBIDDEN);

    let by_staff = shop
        .app
        .request("POST", "/pedidos", Some(body(shop.client_id)), Some(&shop.staff))
        .await;
    assert_eq!(by_staff.status, StatusCode::FORBIDDEN);

    let anonymous = shop
        .app
        .request("POST", "/pedidos", Some(body(shop.client_id)), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["erro"], "Authentication required");

    let zero = shop
        .app
        .request(
            "POST",
            "/pedidos",
            Some(json!({ "clienteId": shop.client_id, "boloId": shop.cake_id, "quantidade": 0 })),
            Some(&shop.client),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let unknown_cake = shop
        .app
        .request(
            "POST",
            "/pedidos",
            Some(json!({ "clienteId": shop.client_id, "boloId": 999 })),
            Some(&shop.client),
        )
        .await;
    assert_eq!(unknown_cake.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inactive_cake_cannot_be_ordered() {
    let shop = shop(helpers::TestApp::new()).await;
    shop.app
        .request("DELETE", &format!("/bolos/{}", shop.cake_id), None, Some(&shop.staff))
        .await;

    let response = shop
        .app
        .request(
            "POST",
            "/pedidos",
            Some(json!({ "clienteId": shop.client_id, "boloId": shop.cake_id })),
            Some(&shop.client),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guest_ordering_toggle() {
    let shop = shop(helpers::TestApp::with_guest_orders()).await;
    let body = json!({ "clienteId": shop.client_id, "boloId": shop.cake_id });

    let guest = shop.app.request("POST", "/pedidos", Some(body.clone()), None).await;
    assert_eq!(guest.status, StatusCode::CREATED);

    let bad_token = shop
        .app
        .request("POST", "/pedidos", Some(body), Some("garbage"))
        .await;
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);

    let unknown_customer = shop
        .app
        .request(
            "POST",
            "/pedidos",
            Some(json!({ "clienteId": Uuid::new_v4(), "boloId": shop.cake_id })),
            None,
        )
        .await;
    assert_eq!(unknown_customer.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_listings() {
    let shop = shop(helpers::TestApp::new()).await;
    let (bia, bia_token) = shop.app.account_with_token("Bia", Role::Client).await;
    shop.order().await;
    shop.app.place_order(bia, shop.cake_id, &bia_token).await;

    let denied = shop.app.request("GET", "/pedidos", None, Some(&shop.client)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let all = shop.app.request("GET", "/pedidos", None, Some(&shop.staff)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let own = shop
        .app
        .request("GET", &format!("/pedidos/cliente/{}", shop.client_id), None, Some(&shop.client))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    let own = own.body.as_array().unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["clienteId"], shop.client_id.to_string());

    let foreign = shop
        .app
        .request("GET", &format!("/pedidos/usuario/{bia}"), None, Some(&shop.client))
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let by_staff = shop
        .app
        .request("GET", &format!("/pedidos/usuario/{bia}"), None, Some(&shop.staff))
        .await;
    assert_eq!(by_staff.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_full_lifecycle_notifies_customer() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.order().await;

    let confirmed = shop
        .app
        .request(
            "PATCH",
            &format!("/pedidos/{id}"),
            Some(json!({ "status": "confirmed" })),
            Some(&shop.staff),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);
    assert_eq!(confirmed.body["status"], "CONFIRMED");

    for status in ["IN_PREPARATION", "SHIPPED"] {
        let response = shop.app.set_status(id, status, &shop.staff).await;
        assert_eq!(response.body["status"], status);
    }

    let received = shop
        .app
        .request("PATCH", &format!("/pedidos/recebido/{id}"), None, Some(&shop.client))
        .await;
    assert_eq!(received.status, StatusCode::OK);
    assert_eq!(received.body["status"], "CUSTOMER_RECEIVED");

    let mail = shop.app.sent_mail().await;
    let subjects: Vec<&str> = mail.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects.len(), 4);
    assert!(subjects.contains(&"Order update: SHIPPED"));
    assert!(subjects.contains(&"Order update: CUSTOMER_RECEIVED"));
    assert!(mail.iter().all(|m| m.to_address == "maria@email.com"));
    assert_eq!(shop.transitions_logged().await, 4);
}

#[tokio::test]
async fn test_receipt_requires_owner_and_shipped() {
    let shop = shop(helpers::TestApp::new()).await;
    let (_, bia_token) = shop.app.account_with_token("Bia", Role::Client).await;
    let placed = shop.order().await;
    let shipped = shop.shipped_order().await;

    let not_owner = shop
        .app
        .request("PATCH", &format!("/pedidos/recebido/{shipped}"), None, Some(&bia_token))
        .await;
    assert_eq!(not_owner.status, StatusCode::FORBIDDEN);
    assert_eq!(not_owner.body["erro"], format!("Order {shipped} does not belong to you"));

    let too_early = shop
        .app
        .request("PATCH", &format!("/pedidos/recebido/{placed}"), None, Some(&shop.client))
        .await;
    assert_eq!(too_early.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        too_early.body["erro"],
        "Order must be SHIPPED to confirm receipt (current status: PLACED)"
    );

    assert_eq!(shop.status_of(shipped).await, "SHIPPED");
    assert_eq!(shop.status_of(placed).await, "PLACED");
}

#[tokio::test]
async fn test_staff_cannot_mark_received() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.shipped_order().await;

    let response = shop.app.set_status(id, "CUSTOMER_RECEIVED", &shop.staff).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let via_route = shop
        .app
        .request("PATCH", &format!("/pedidos/recebido/{id}"), None, Some(&shop.staff))
        .await;
    assert_eq!(via_route.status, StatusCode::FORBIDDEN);
    assert_eq!(shop.status_of(id).await, "SHIPPED");
}

#[tokio::test]
async fn test_clients_cannot_advance_orders() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.order().await;

    let response = shop.app.set_status(id, "CONFIRMED", &shop.client).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_forward_moves_are_single_steps() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.order().await;

    let skip = shop.app.set_status(id, "SHIPPED", &shop.staff).await;
    assert_eq!(skip.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        skip.body["erro"],
        "Order must be IN_PREPARATION to move to SHIPPED (current status: PLACED)"
    );

    shop.app.set_status(id, "CONFIRMED", &shop.staff).await;
    let back = shop.app.set_status(id, "PLACED", &shop.staff).await;
    assert_eq!(back.status, StatusCode::BAD_REQUEST);
    assert_eq!(shop.status_of(id).await, "CONFIRMED");
}

#[tokio::test]
async fn test_unknown_status_is_rejected_before_lookup() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.order().await;

    let unknown = shop.app.set_status(id, "DELIVERED", &shop.staff).await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert!(unknown.body["erro"].as_str().unwrap().starts_with("Invalid order status"));

    let missing = shop
        .app
        .request("PATCH", &format!("/pedidos/{id}/status"), Some(json!({})), Some(&shop.staff))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let no_order = shop.app.set_status(999, "DELIVERED", &shop.staff).await;
    assert_eq!(no_order.status, StatusCode::BAD_REQUEST);

    assert_eq!(shop.status_of(id).await, "PLACED");
    assert!(shop.app.sent_mail().await.is_empty());
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let shop = shop(helpers::TestApp::new()).await;

    let response = shop.app.set_status(999, "CONFIRMED", &shop.staff).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["erro"], "Order 999 not found");
}

#[tokio::test]
async fn test_repeated_transition_has_no_second_effect() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.shipped_order().await;
    let before = shop.app.sent_mail().await.len();

    for _ in 0..2 {
        let response = shop
            .app
            .request("PATCH", &format!("/pedidos/recebido/{id}"), None, Some(&shop.client))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], "CUSTOMER_RECEIVED");
    }

    assert_eq!(shop.app.sent_mail().await.len(), before + 1);
    assert_eq!(shop.transitions_logged().await, 4);
}

#[tokio::test]
async fn test_cancellation_rules() {
    let shop = shop(helpers::TestApp::new()).await;
    let (_, bia_token) = shop.app.account_with_token("Bia", Role::Client).await;

    let own = shop.order().await;
    let response = shop
        .app
        .request("PATCH", &format!("/pedidos/cancelar/{own}"), None, Some(&shop.client))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "CANCELLED");

    let terminal = shop
        .app
        .request("PATCH", &format!("/pedidos/cancelar/{own}"), None, Some(&shop.staff))
        .await;
    assert_eq!(terminal.status, StatusCode::OK, "same status is a no-op");
    let revive = shop.app.set_status(own, "CONFIRMED", &shop.staff).await;
    assert_eq!(revive.status, StatusCode::BAD_REQUEST);
    assert_eq!(revive.body["erro"], format!("Order {own} is CANCELLED and can no longer change"));

    let other = shop.order().await;
    let foreign = shop
        .app
        .request("PATCH", &format!("/pedidos/cancelar/{other}"), None, Some(&bia_token))
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let shipped = shop.shipped_order().await;
    let late = shop
        .app
        .request("PATCH", &format!("/pedidos/cancelar/{shipped}"), None, Some(&shop.client))
        .await;
    assert_eq!(late.status, StatusCode::BAD_REQUEST);

    let by_staff = shop
        .app
        .request("PATCH", &format!("/pedidos/cancelar/{shipped}"), None, Some(&shop.staff))
        .await;
    assert_eq!(by_staff.status, StatusCode::OK);
    assert_eq!(by_staff.body["status"], "CANCELLED");
}

#[tokio::test]
async fn test_mail_failure_keeps_the_transition() {
    let shop = shop(helpers::TestApp::with_failing_mailer()).await;
    let id = shop.order().await;

    let response = shop.app.set_status(id, "CONFIRMED", &shop.staff).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "CONFIRMED");

    assert!(shop.app.sent_mail().await.is_empty());
    assert_eq!(shop.status_of(id).await, "CONFIRMED");
    assert_eq!(shop.transitions_logged().await, 1);
}

#[tokio::test]
async fn test_purge_is_staff_only() {
    let shop = shop(helpers::TestApp::new()).await;
    let id = shop.order().await;

    let by_client = shop
        .app
        .request("DELETE", &format!("/pedidos/{id}"), None, Some(&shop.client))
        .await;
    assert_eq!(by_client.status, StatusCode::FORBIDDEN);

    let removed = shop
        .app
        .request("DELETE", &format!("/pedidos/{id}"), None, Some(&shop.staff))
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let again = shop
        .app
        .request("DELETE", &format!("/pedidos/{id}"), None, Some(&shop.staff))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let all = shop.app.request("GET", "/pedidos", None, Some(&shop.staff)).await;
    assert!(all.body.as_array().unwrap().is_empty());

    helpers::settle().await;
    let logs = shop.app.request("GET", "/logs", None, Some(&shop.staff)).await;
    assert_eq!(logs.body[0]["descricao"], "Order removed");
}

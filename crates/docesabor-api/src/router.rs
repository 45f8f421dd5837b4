//! Route definitions for the Doce Sabor HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(account_routes())
        .merge(category_routes())
        .merge(cake_routes())
        .merge(order_routes())
        .merge(dashboard_routes())
        .merge(audit_routes())
        .with_state(state)
}

/// Banner and health check (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
}

/// Login and its legacy per-role aliases
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/clientes/login", post(handlers::auth::login))
        .route("/funcionarios/login", post(handlers::auth::login))
        .route("/admins/login", post(handlers::auth::login))
}

/// Registration and account lookup
fn account_routes() -> Router<AppState> {
    use handlers::account::*;

    Router::new()
        .route("/usuarios", get(list_accounts).post(register_client))
        .route("/usuarios/funcionarios", post(create_staff))
        .route("/usuarios/{id}", get(get_account))
        .route("/clientes", get(list_clients).post(register_client))
        .route("/clientes/{id}", get(get_account))
        .route("/funcionarios", get(list_staff).post(create_staff))
        .route("/funcionarios/{id}", get(get_account))
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    use handlers::category::*;

    Router::new()
        .route("/categorias", get(list_categories).post(create_category))
        .route(
            "/categorias/{id}",
            put(replace_category).delete(purge_category),
        )
}

/// Cake catalog
fn cake_routes() -> Router<AppState> {
    use handlers::cake::*;

    Router::new()
        .route("/bolos", get(list_cakes).post(create_cake))
        .route("/bolos/destaques", get(featured_cakes))
        .route("/bolos/recentes", get(recent_cakes))
        .route("/bolos/pesquisa/{termo}", get(search_cakes))
        .route("/bolos/destacar/{id}", patch(toggle_featured))
        .route(
            "/bolos/{id}",
            get(get_cake).put(replace_cake).delete(deactivate_cake),
        )
}

/// Orders and their lifecycle
fn order_routes() -> Router<AppState> {
    use handlers::order::*;

    Router::new()
        .route("/pedidos", get(list_orders).post(place_order))
        .route("/pedidos/cliente/{id}", get(list_customer_orders))
        .route("/pedidos/usuario/{id}", get(list_customer_orders))
        .route("/pedidos/recebido/{id}", patch(confirm_receipt))
        .route("/pedidos/cancelar/{id}", patch(cancel_order))
        .route("/pedidos/{id}", patch(change_status).delete(purge_order))
        .route("/pedidos/{id}/status", patch(change_status))
}

/// Dashboard aggregates
fn dashboard_routes() -> Router<AppState> {
    use handlers::dashboard::*;

    Router::new()
        .route("/dashboard/gerais", get(general))
        .route("/dashboard/estatisticas", get(general))
        .route("/dashboard/bolosPorCategoria", get(cakes_by_category))
        .route("/dashboard/bolosCategoria", get(cakes_by_category))
        .route("/dashboard/clientesCidade", get(customers_by_city))
        .route("/dashboard/pedidosPorStatus", get(orders_by_status))
}

/// Audit log
fn audit_routes() -> Router<AppState> {
    Router::new().route("/logs", get(handlers::audit::list_logs))
}

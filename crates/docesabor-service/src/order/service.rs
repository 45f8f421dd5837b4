//! Order placement, listings and purge.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use docesabor_auth::jwt::AUTHENTICATION_MESSAGE;
use docesabor_auth::{AccessGuard, Capability, Decision};
use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_database::{AccountStore, CakeStore, OrderStore};
use docesabor_entity::account::Role;
use docesabor_entity::audit::CreateAuditLogEntry;
use docesabor_entity::order::{CreateOrder, OrderDetails};

use super::lifecycle::order_not_found;
use crate::audit::AuditTrail;
use crate::context::RequestContext;

/// Order placement and queries. Status changes go through
/// [`OrderLifecycle`](super::OrderLifecycle).
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    accounts: Arc<dyn AccountStore>,
    cakes: Arc<dyn CakeStore>,
    guard: Arc<AccessGuard>,
    audit: AuditTrail,
    /// Whether unauthenticated callers may place orders.
    allow_guest_orders: bool,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("allow_guest_orders", &self.allow_guest_orders)
            .finish_non_exhaustive()
    }
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        orders: Arc<dyn OrderStore>,
        accounts: Arc<dyn AccountStore>,
        cakes: Arc<dyn CakeStore>,
        guard: Arc<AccessGuard>,
        audit: AuditTrail,
        allow_guest_orders: bool,
    ) -> Self {
        Self {
            orders,
            accounts,
            cakes,
            guard,
            audit,
            allow_guest_orders,
        }
    }

    /// Place an order in `PLACED`.
    ///
    /// An authenticated caller must be a client ordering for themselves.
    /// `ctx = None` is a guest and is only accepted when guest ordering is on.
    pub async fn place(
        &self,
        ctx: Option<&RequestContext>,
        req: CreateOrder,
    ) -> AppResult<OrderDetails> {
        match ctx {
            Some(ctx) => {
                self.guard.require(ctx.role, Capability::PlaceOrder)?;
                if !ctx.is_account(req.customer_id) {
                    return Err(AppError::ownership(
                        "Orders can only be placed for your own account",
                    ));
                }
            }
            None if self.allow_guest_orders => {}
            None => return Err(AppError::authentication(AUTHENTICATION_MESSAGE)),
        }

        req.validate()?;

        let customer = self
            .accounts
            .find_by_id(req.customer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {} not found", req.customer_id)))?;
        if customer.role != Role::Client {
            return Err(AppError::validation("Orders must belong to a client account"));
        }

        match self.cakes.find_by_id(req.cake_id).await? {
            Some(cake) if cake.active => {}
            _ => return Err(AppError::not_found(format!("Cake {} not found", req.cake_id))),
        }

        let order = self.orders.create(&req).await?;
        info!(
            order_id = order.order.id,
            customer_id = %order.order.customer_id,
            cake_id = order.order.cake_id,
            guest = ctx.is_none(),
            "Order placed"
        );
        Ok(order)
    }

    /// Every order, newest first.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<OrderDetails>> {
        self.guard.require(ctx.role, Capability::ListAllOrders)?;
        self.orders.find_all().await
    }

    /// One customer's orders, newest first. Open to that customer and staff.
    pub async fn list_for_customer(
        &self,
        ctx: &RequestContext,
        customer_id: Uuid,
    ) -> AppResult<Vec<OrderDetails>> {
        let allowed = |capability| self.guard.decide(ctx.role, capability) == Decision::Allow;
        let permitted = allowed(Capability::ListAllOrders)
            || (ctx.is_account(customer_id) && allowed(Capability::ViewOwnOrders));
        if !permitted {
            return Err(AppError::ownership("You can only view your own orders"));
        }
        self.orders.find_by_customer(customer_id).await
    }

    /// Hard-delete an order.
    pub async fn purge(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.guard.require(ctx.role, Capability::PurgeOrder)?;
        if !self.orders.purge(id).await? {
            return Err(order_not_found(id));
        }
        info!(order_id = id, actor = %ctx.account_id, "Order purged");
        self.audit.record(
            CreateAuditLogEntry::new(ctx.account_id, "Order removed")
                .with_supplement(format!("Order {id}")),
        );
        Ok(())
    }
}

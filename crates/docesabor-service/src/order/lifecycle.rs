//! Order status state machine.
//!
//! Forward path `PLACED → CONFIRMED → IN_PREPARATION → SHIPPED` is driven by
//! staff one step at a time. Only the owning client moves a `SHIPPED` order
//! to `CUSTOMER_RECEIVED`. `CANCELLED` is open to the owning client while the
//! order is `PLACED` or `CONFIRMED`, and to staff from any non-terminal state.
//!
//! Checks run in a fixed order: capability, ownership, no-op, precondition.

use std::sync::Arc;

use tracing::{debug, info};

use docesabor_auth::{AccessGuard, Capability, Decision};
use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_database::OrderStore;
use docesabor_entity::audit::CreateAuditLogEntry;
use docesabor_entity::order::{Order, OrderDetails, OrderStatus};

use crate::audit::AuditTrail;
use crate::context::RequestContext;
use crate::notification::OrderNotifier;

/// Which orders a caller may move to a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Any order (staff).
    AnyOrder,
    /// Only orders the caller placed.
    OwnOrder,
}

/// What a permitted status request does to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Write the new status.
    Apply,
    /// The order already has the requested status.
    Unchanged,
}

/// Capability check for moving an order into `target`.
pub fn scope_for(
    guard: &AccessGuard,
    ctx: &RequestContext,
    target: OrderStatus,
) -> AppResult<Scope> {
    match target {
        OrderStatus::CustomerReceived => {
            guard.require(ctx.role, Capability::ConfirmReceipt)?;
            Ok(Scope::OwnOrder)
        }
        OrderStatus::Cancelled => {
            if guard.decide(ctx.role, Capability::CancelAnyOrder) == Decision::Allow {
                return Ok(Scope::AnyOrder);
            }
            guard.require(ctx.role, Capability::CancelOwnOrder)?;
            Ok(Scope::OwnOrder)
        }
        OrderStatus::Placed
        | OrderStatus::Confirmed
        | OrderStatus::InPreparation
        | OrderStatus::Shipped => {
            guard.require(ctx.role, Capability::AdvanceOrder)?;
            Ok(Scope::AnyOrder)
        }
    }
}

/// Decide whether `order` may move to `target`.
///
/// Runs every check in order and returns the first failure: capability
/// (`Authorization`), ownership (`Ownership`), then the state precondition
/// (`Precondition`). Requesting the current status is [`Transition::Unchanged`].
pub fn plan_transition(
    guard: &AccessGuard,
    ctx: &RequestContext,
    order: &Order,
    target: OrderStatus,
) -> AppResult<Transition> {
    let scope = scope_for(guard, ctx, target)?;
    check_state(scope, ctx, order, target)
}

fn check_state(
    scope: Scope,
    ctx: &RequestContext,
    order: &Order,
    target: OrderStatus,
) -> AppResult<Transition> {
    if scope == Scope::OwnOrder && !ctx.is_account(order.customer_id) {
        return Err(AppError::ownership(format!(
            "Order {} does not belong to you",
            order.id
        )));
    }

    let current = order.status;
    if current == target {
        return Ok(Transition::Unchanged);
    }
    if current.is_terminal() {
        return Err(AppError::precondition(format!(
            "Order {} is {current} and can no longer change",
            order.id
        )));
    }

    match target {
        OrderStatus::Cancelled => {
            if scope == Scope::OwnOrder
                && !matches!(current, OrderStatus::Placed | OrderStatus::Confirmed)
            {
                return Err(AppError::precondition(format!(
                    "Order can only be cancelled while PLACED or CONFIRMED (current status: {current})"
                )));
            }
        }
        OrderStatus::CustomerReceived => {
            if current != OrderStatus::Shipped {
                return Err(AppError::precondition(format!(
                    "Order must be SHIPPED to confirm receipt (current status: {current})"
                )));
            }
        }
        _ => match target.previous() {
            Some(required) if required == current => {}
            Some(required) => {
                return Err(AppError::precondition(format!(
                    "Order must be {required} to move to {target} (current status: {current})"
                )));
            }
            None => {
                return Err(AppError::precondition(format!(
                    "Order cannot return to {target} (current status: {current})"
                )));
            }
        },
    }

    Ok(Transition::Apply)
}

/// Applies status transitions and fires their side effects.
#[derive(Clone)]
pub struct OrderLifecycle {
    orders: Arc<dyn OrderStore>,
    guard: Arc<AccessGuard>,
    notifier: OrderNotifier,
    audit: AuditTrail,
}

impl std::fmt::Debug for OrderLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLifecycle")
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl OrderLifecycle {
    /// Creates a new lifecycle manager.
    pub fn new(
        orders: Arc<dyn OrderStore>,
        guard: Arc<AccessGuard>,
        notifier: OrderNotifier,
        audit: AuditTrail,
    ) -> Self {
        Self {
            orders,
            guard,
            notifier,
            audit,
        }
    }

    /// Move an order to `target`.
    ///
    /// The write is a compare-and-set on the status that was checked, so a
    /// concurrent change is reported as `Conflict` instead of being
    /// overwritten. On success the customer is e-mailed in the background.
    pub async fn change_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        target: OrderStatus,
    ) -> AppResult<OrderDetails> {
        let scope = scope_for(&self.guard, ctx, target)?;
        let current = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))?;

        if check_state(scope, ctx, &current.order, target)? == Transition::Unchanged {
            debug!(order_id = id, status = %target, "Order already in requested status");
            return Ok(current);
        }

        let from = current.order.status;
        let updated = match self.orders.update_status(id, from, target).await? {
            Some(updated) => updated,
            None => return self.lost_race(id, target).await,
        };

        info!(
            order_id = id,
            from = %from,
            to = %target,
            actor = %ctx.account_id,
            "Order status changed"
        );
        self.audit.record(
            CreateAuditLogEntry::new(ctx.account_id, "Order status changed")
                .with_supplement(format!("Order {id}: {from} -> {target}")),
        );
        self.notifier.notify_status_change(&updated);

        Ok(updated)
    }

    /// Owning client confirms a shipped order arrived.
    pub async fn confirm_receipt(&self, ctx: &RequestContext, id: i64) -> AppResult<OrderDetails> {
        self.change_status(ctx, id, OrderStatus::CustomerReceived).await
    }

    /// Cancel an order (owning client early on, staff any time before the end).
    pub async fn cancel(&self, ctx: &RequestContext, id: i64) -> AppResult<OrderDetails> {
        self.change_status(ctx, id, OrderStatus::Cancelled).await
    }

    /// The compare-and-set matched nothing. Work out why.
    async fn lost_race(&self, id: i64, target: OrderStatus) -> AppResult<OrderDetails> {
        match self.orders.find_by_id(id).await? {
            None => Err(order_not_found(id)),
            // A concurrent identical request got there first.
            Some(order) if order.order.status == target => Ok(order),
            Some(order) => Err(AppError::conflict(format!(
                "Order {id} was changed concurrently; its status is now {}",
                order.order.status
            ))),
        }
    }
}

pub(crate) fn order_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Order {id} not found"))
}

//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docesabor_auth::jwt::Claims;
use docesabor_entity::account::Role;

/// Context for the current authenticated request.
///
/// Built from verified token claims and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// Display name from the token.
    pub name: String,
    /// Role at the time the token was issued.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, name: impl Into<String>, role: Role) -> Self {
        Self {
            account_id,
            name: name.into(),
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller is the given account.
    pub fn is_account(&self, account_id: Uuid) -> bool {
        self.account_id == account_id
    }
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self::new(claims.sub, claims.name.clone(), claims.role)
    }
}

//! JWT claims structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docesabor_entity::account::Role;

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account ID.
    pub sub: Uuid,
    /// Account display name at issuance.
    pub name: String,
    /// Account role at issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

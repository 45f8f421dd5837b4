//! Request DTOs.

use serde::Deserialize;

/// Body of `PATCH /pedidos/{id}` and `PATCH /pedidos/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    /// Target status label, e.g. `"CONFIRMED"`.
    #[serde(default)]
    pub status: String,
}

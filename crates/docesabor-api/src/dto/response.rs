//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `"up"` or `"down"`.
    pub database: String,
}

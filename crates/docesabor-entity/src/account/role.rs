//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three role tiers of the storefront.
///
/// Older clients still send the numeric access level (`1`, `2`, `5`) or the
/// Portuguese labels. Both are mapped into this enum during deserialization;
/// nothing past the boundary sees the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE", try_from = "RoleRepr")]
pub enum Role {
    /// Self-registered customer.
    Client,
    /// Shop employee.
    Employee,
    /// Shop administrator.
    Admin,
}

impl Role {
    /// Map a legacy access level into a role.
    ///
    /// `1` is a client, `2..=4` an employee, `5` and above an admin.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Client),
            2..=4 => Some(Self::Employee),
            l if l >= 5 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Employees and admins.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Employee | Self::Admin)
    }

    /// Return the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Employee => "EMPLOYEE",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = docesabor_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLIENT" | "CLIENTE" => Ok(Self::Client),
            "EMPLOYEE" | "FUNCIONARIO" => Ok(Self::Employee),
            "ADMIN" => Ok(Self::Admin),
            other => match other.parse::<i64>().ok().and_then(Self::from_level) {
                Some(role) => Ok(role),
                None => Err(docesabor_core::AppError::validation(format!(
                    "Invalid role: '{s}'. Expected one of: CLIENT, EMPLOYEE, ADMIN"
                ))),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Level(i64),
    Label(String),
}

impl TryFrom<RoleRepr> for Role {
    type Error = String;

    fn try_from(repr: RoleRepr) -> Result<Self, Self::Error> {
        match repr {
            RoleRepr::Level(level) => {
                Self::from_level(level).ok_or_else(|| format!("Invalid access level: {level}"))
            }
            RoleRepr::Label(label) => label.parse().map_err(|e: docesabor_core::AppError| e.message),
        }
    }
}

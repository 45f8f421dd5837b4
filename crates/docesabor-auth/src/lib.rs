//! # docesabor-auth
//!
//! Authentication and authorization primitives for the Doce Sabor storefront.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-limited bearer tokens carrying identity and role
//! - `password`: Argon2id hashing (with legacy bcrypt verification) and the
//!   password acceptance policy
//! - `rbac`: role → capability policies and the access guard

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy, PolicyViolation};
pub use rbac::{AccessGuard, Capability, CapabilityPolicies, Decision};

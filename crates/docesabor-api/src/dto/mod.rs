//! Request and response DTOs that have no entity counterpart.

pub mod request;
pub mod response;

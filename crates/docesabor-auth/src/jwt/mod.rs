//! JWT token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{AUTHENTICATION_MESSAGE, JwtDecoder};
pub use encoder::{IssuedToken, JwtEncoder};

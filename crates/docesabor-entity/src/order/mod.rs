//! Order domain entities.

pub mod model;
pub mod status;

pub use model::{CreateOrder, Order, OrderDetails};
pub use status::OrderStatus;

//! Order command and query handlers.

mod get_order;
mod list_order_products;
mod update_order_status;

pub use get_order::{GetOrderHandler, GetOrderQuery};
pub use list_order_products::{ListOrderProductsHandler, ListOrderProductsQuery};
pub use update_order_status::{
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
};

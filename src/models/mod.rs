//! Contains data structures representing database entities and the
//! client-submitted cart snapshot.

pub mod cart;
pub mod order;
pub mod order_item;
pub mod product;

// Re-export the model structs for convenient access
pub use cart::CartLine;
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;

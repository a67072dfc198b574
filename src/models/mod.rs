pub mod catalog_item;
pub mod catalog;
pub mod cart;
pub mod order;

pub use catalog_item::{CatalogItem, ItemId};
pub use catalog::{Catalog, CatalogError};
pub use cart::{Adjustment, Cart, CartLine, CartTotals};
pub use order::OrderSnapshot;

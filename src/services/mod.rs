pub mod notification;
pub mod cart_service;
pub mod checkout_service;

pub use notification::*;
pub use cart_service::*;
pub use checkout_service::*;

pub mod aggregate;
pub mod view;

pub use aggregate::{Basket, BasketItem};
pub use view::{branch_options, BasketItemView, BasketRecord, STATUS_OPTIONS};

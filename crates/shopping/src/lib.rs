mod list;

pub use chefbuddy_shared::shopping::ShoppingItem;
pub use list::{NewShoppingItem, ShoppingList, format_quantity};

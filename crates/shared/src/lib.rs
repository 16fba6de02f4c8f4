mod date;
mod error;
pub mod food;
pub mod mealplan;
pub mod recipe;
pub mod shopping;
pub mod store;
pub mod user;

pub use date::*;
pub use error::*;
pub use store::{MemoryStore, SqliteStore, Store};

//! HTTP client for the ChefBuddy backend.
//!
//! One request per call with no retries. Every failure becomes a
//! [`ClientError`] whose [`ClientError::user_message`] is what the user sees.

mod api;
mod error;
mod types;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ClientError, Operation};
pub use types::{Advice, GeneratedIngredient, GeneratedRecipe, MultiItemRecipe, UsedItem};

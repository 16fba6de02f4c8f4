//! Pantry tracking: expiry prediction, urgency tiers and item storage.

mod expiry;
mod repository;
mod shelf_life;

pub use expiry::{
    AdviceContext, ClassifiedItem, ExpiryClassifier, ExpiryPrediction, UrgencyGroups,
    UrgencyTier,
};
pub use repository::PantryRepository;
pub use shelf_life::ShelfLifeTable;

pub use chefbuddy_shared::food::{FoodCategory, FoodItem, NewFoodItem};

/// Items with this many days left (or fewer) raise an expiry alert.
pub const DEFAULT_ALERT_DAYS: i64 = 3;

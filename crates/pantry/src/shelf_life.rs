use std::collections::HashMap;

use chefbuddy_shared::food::FoodCategory;
use serde::{Deserialize, Serialize};

/// Days a category is assumed safe after purchase.
///
/// The table is configuration, not policy: [`ShelfLifeTable::default`]
/// carries the stock values and deployments may override any entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeTable {
    days: HashMap<String, i64>,
    fallback_days: i64,
}

impl Default for ShelfLifeTable {
    fn default() -> Self {
        let days = [
            (FoodCategory::Dairy, 7),
            (FoodCategory::Vegetables, 5),
            (FoodCategory::Fruits, 5),
            (FoodCategory::Meat, 2),
            (FoodCategory::Packaged, 180),
            (FoodCategory::Spices, 365),
            (FoodCategory::Bakery, 4),
            (FoodCategory::Frozen, 90),
            (FoodCategory::Produce, 5),
            (FoodCategory::Pantry, 180),
        ]
        .into_iter()
        .map(|(category, days)| (category.as_str().to_owned(), days))
        .collect();

        Self {
            days,
            fallback_days: 180,
        }
    }
}

impl ShelfLifeTable {
    /// Replace entries by category name (case-insensitive). Unknown names are
    /// added as extra categories.
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        for (name, days) in overrides {
            self.days.insert(name.as_ref().trim().to_lowercase(), days);
        }
        self
    }

    pub fn with_fallback(mut self, days: i64) -> Self {
        self.fallback_days = days;
        self
    }

    pub fn fallback_days(&self) -> i64 {
        self.fallback_days
    }

    pub fn shelf_life_days(&self, category: &FoodCategory) -> i64 {
        match self.days.get(category.as_str()) {
            Some(days) => *days,
            None => {
                tracing::debug!(
                    category = category.as_str(),
                    fallback = self.fallback_days,
                    "no shelf life configured, using fallback"
                );
                self.fallback_days
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.days.iter().map(|(name, days)| (name.as_str(), *days))
    }
}

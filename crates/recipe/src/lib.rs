mod catalog;
pub mod dietary_filter;
mod keywords;
mod meal_time;

pub use catalog::RecipeCatalog;
pub use chefbuddy_shared::recipe::{Ingredient, Nutrition, Recipe};
pub use dietary_filter::{
    DEFAULT_BROWSE_LIMIT, DEFAULT_RECOMMEND_LIMIT, DietaryFilter, DietaryRule, matches_keyword,
    search_recipes, search_text,
};
pub use keywords::{DietaryKeywords, KEYWORDS_VERSION};
pub use meal_time::MealTime;

pub mod calendar;
mod planner;

pub use chefbuddy_shared::mealplan::PlannedRecipe;
pub use planner::MealPlanner;

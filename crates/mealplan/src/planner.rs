use std::collections::BTreeMap;

use chefbuddy_recipe::{Recipe, RecipeCatalog};
use chefbuddy_shared::{
    Result, Store, bail, mealplan::PlannedRecipe, not_found, parse_date, shopping::ShoppingItem,
    store::Documents,
};
use chefbuddy_shopping::ShoppingList;
use time::{Date, Month};

/// Recipes planned per calendar day, keyed by `YYYY-MM-DD`.
pub struct MealPlanner<S> {
    days: Documents<S, Vec<PlannedRecipe>>,
}

fn day_key(date: Date) -> String {
    date.to_string()
}

impl<S: Store> MealPlanner<S> {
    pub const COLLECTION: &'static str = "meal_plans";

    pub fn new(store: S) -> Self {
        Self {
            days: Documents::new(store, Self::COLLECTION),
        }
    }

    /// Planned entries for a day, in the order they were added.
    pub async fn day(&self, date: Date) -> Result<Vec<PlannedRecipe>> {
        Ok(self.days.get(&day_key(date)).await?.unwrap_or_default())
    }

    /// Append a recipe to a day. The same recipe may be planned twice.
    #[tracing::instrument(skip(self))]
    pub async fn add_recipe(&self, date: Date, recipe_id: &str) -> Result<Vec<PlannedRecipe>> {
        let recipe_id = recipe_id.trim();
        if recipe_id.is_empty() {
            bail!("recipe id is required");
        }

        let mut planned = self.day(date).await?;
        planned.push(PlannedRecipe::new(recipe_id));
        self.days.put(&day_key(date), &planned).await?;

        tracing::info!(%date, recipe_id, "recipe planned");

        Ok(planned)
    }

    /// Remove the entry at `index`. Empty days are dropped from the store.
    #[tracing::instrument(skip(self))]
    pub async fn remove_recipe(&self, date: Date, index: usize) -> Result<PlannedRecipe> {
        let key = day_key(date);
        let mut planned = self.day(date).await?;

        if index >= planned.len() {
            not_found!("planned recipe #{index} on {date}");
        }

        let removed = planned.remove(index);
        if planned.is_empty() {
            self.days.delete(&key).await?;
        } else {
            self.days.put(&key, &planned).await?;
        }

        tracing::info!(%date, index, recipe_id = %removed.id, "recipe unplanned");

        Ok(removed)
    }

    /// Recipes for a day resolved against the catalog. Ids the catalog no
    /// longer knows are skipped.
    pub async fn recipes_for_day<'c>(
        &self,
        date: Date,
        catalog: &'c RecipeCatalog,
    ) -> Result<Vec<&'c Recipe>> {
        let planned = self.day(date).await?;

        Ok(planned
            .iter()
            .filter_map(|entry| {
                let recipe = catalog.find(&entry.id);
                if recipe.is_none() {
                    tracing::debug!(%date, recipe_id = %entry.id, "planned recipe not in catalog");
                }
                recipe
            })
            .collect())
    }

    pub async fn total_calories(&self, date: Date, catalog: &RecipeCatalog) -> Result<f64> {
        Ok(self
            .recipes_for_day(date, catalog)
            .await?
            .iter()
            .map(|recipe| recipe.total_calories())
            .sum())
    }

    /// Non-empty days of one month.
    pub async fn plans_in_month(
        &self,
        year: i32,
        month: Month,
    ) -> Result<BTreeMap<Date, Vec<PlannedRecipe>>> {
        let mut plans = BTreeMap::new();

        for (key, planned) in self.days.entries().await? {
            let Some(date) = parse_date(&key) else {
                tracing::warn!(key = %key, "skipping meal plan with invalid date key");
                continue;
            };

            if date.year() == year && date.month() == month && !planned.is_empty() {
                plans.insert(date, planned);
            }
        }

        Ok(plans)
    }

    /// Push every ingredient of a recipe onto the shopping list.
    #[tracing::instrument(skip_all, fields(recipe_id = %recipe.id))]
    pub async fn add_recipe_to_shopping<L: Store>(
        &self,
        recipe: &Recipe,
        shopping: &ShoppingList<L>,
    ) -> Result<Vec<ShoppingItem>> {
        shopping.add_ingredients(&recipe.ingredients).await
    }
}

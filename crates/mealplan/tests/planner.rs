use std::sync::Arc;

use chefbuddy_mealplan::{MealPlanner, PlannedRecipe};
use chefbuddy_recipe::RecipeCatalog;
use chefbuddy_shared::{Error, MemoryStore, SqliteStore};
use chefbuddy_shopping::ShoppingList;
use temp_dir::TempDir;
use time::{Month, macros::date};

fn planner(store: &Arc<MemoryStore>) -> MealPlanner<Arc<MemoryStore>> {
    MealPlanner::new(store.clone())
}

#[tokio::test]
async fn days_keep_insertion_order_and_duplicates() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let plans = planner(&store);
    let monday = date!(2025 - 06 - 09);

    plans.add_recipe(monday, "3").await?;
    plans.add_recipe(monday, "1").await?;
    let day = plans.add_recipe(monday, " 3 ").await?;

    assert_eq!(
        day,
        vec![
            PlannedRecipe::new("3"),
            PlannedRecipe::new("1"),
            PlannedRecipe::new("3"),
        ]
    );
    assert!(plans.day(date!(2025 - 06 - 10)).await?.is_empty());
    assert!(matches!(plans.add_recipe(monday, " ").await, Err(Error::Server(_))));

    Ok(())
}

#[tokio::test]
async fn remove_by_index() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let plans = planner(&store);
    let day = date!(2025 - 06 - 09);

    plans.add_recipe(day, "1").await?;
    plans.add_recipe(day, "2").await?;

    let removed = plans.remove_recipe(day, 0).await?;
    assert_eq!(removed.id, "1");
    assert_eq!(plans.day(day).await?, vec![PlannedRecipe::new("2")]);

    let out_of_range = plans.remove_recipe(day, 1).await;
    assert!(matches!(out_of_range, Err(Error::NotFound(_))));

    plans.remove_recipe(day, 0).await?;
    assert!(plans.plans_in_month(2025, Month::June).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn resolves_recipes_and_calories() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let plans = planner(&store);
    let catalog = RecipeCatalog::bundled()?;
    let day = date!(2025 - 06 - 09);

    plans.add_recipe(day, "1").await?;
    plans.add_recipe(day, "deleted-recipe").await?;
    plans.add_recipe(day, "3").await?;

    let names: Vec<_> = plans
        .recipes_for_day(day, &catalog)
        .await?
        .iter()
        .map(|recipe| recipe.name.as_str())
        .collect();
    assert_eq!(names, vec!["Fluffy Pancakes", "Chicken Stir-Fry"]);

    // 420 from nutrition facts, 390 from the calories shorthand.
    assert_eq!(plans.total_calories(day, &catalog).await?, 810.0);
    assert_eq!(plans.total_calories(date!(2025 - 06 - 10), &catalog).await?, 0.0);

    Ok(())
}

#[tokio::test]
async fn month_view_only_includes_that_month() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let plans = planner(&store);

    plans.add_recipe(date!(2025 - 05 - 31), "1").await?;
    plans.add_recipe(date!(2025 - 06 - 15), "2").await?;
    plans.add_recipe(date!(2025 - 06 - 01), "3").await?;
    plans.add_recipe(date!(2024 - 06 - 01), "4").await?;

    let june = plans.plans_in_month(2025, Month::June).await?;
    let days: Vec<_> = june.keys().copied().collect();

    assert_eq!(days, vec![date!(2025 - 06 - 01), date!(2025 - 06 - 15)]);
    assert_eq!(june[&date!(2025 - 06 - 15)], vec![PlannedRecipe::new("2")]);

    Ok(())
}

#[tokio::test]
async fn recipe_ingredients_go_to_shopping() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let plans = planner(&store);
    let shopping = ShoppingList::new(store.clone());
    let catalog = RecipeCatalog::bundled()?;

    let fried_rice = catalog.find("2").expect("bundled recipe");
    let stir_fry = catalog.find("3").expect("bundled recipe");

    plans.add_recipe_to_shopping(fried_rice, &shopping).await?;
    plans.add_recipe_to_shopping(stir_fry, &shopping).await?;

    let items = shopping.items().await?;
    let soy: Vec<_> = items.iter().filter(|item| item.name == "soy sauce").collect();

    assert_eq!(items.len(), 8);
    assert_eq!(soy.len(), 1);
    assert_eq!(soy[0].quantity, 5.0);
    assert_eq!(soy[0].unit, "tbsp");

    Ok(())
}

#[tokio::test]
async fn plans_survive_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let day = date!(2025 - 06 - 09);

    MealPlanner::new(SqliteStore::connect(&url, 1).await?)
        .add_recipe(day, "7")
        .await?;

    let plans = MealPlanner::new(SqliteStore::connect(&url, 1).await?);
    assert_eq!(plans.day(day).await?, vec![PlannedRecipe::new("7")]);

    Ok(())
}

use anyhow::Result;
use chefbuddy_recipe::{MealTime, Recipe};
use clap::Subcommand;

use super::split_list;
use crate::app::App;

#[derive(Subcommand)]
pub enum RecipesCommand {
    /// Search the catalog, honoring the profile's restrictions and preferences
    Search {
        /// Text to look for in name, cuisine, description and ingredients
        #[arg(default_value = "")]
        query: String,

        /// Extra dietary labels to filter by (repeatable, comma separated)
        #[arg(long = "filter")]
        filters: Vec<String>,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Suggest recipes for the current meal time
    Suggest {
        /// Hour of the day (0-23) instead of the local clock
        #[arg(long)]
        hour: Option<u32>,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show which of the profile's labels a recipe violates
    Check { id: String },
    /// Show one recipe
    Show { id: String },
}

pub async fn run(app: &App, command: RecipesCommand) -> Result<()> {
    match command {
        RecipesCommand::Search {
            query,
            filters,
            limit,
        } => {
            let profile = app.profiles.get().await?;
            let filters = split_list(&filters);
            let limit = limit.unwrap_or(app.config.recipes.browse_limit);

            let recipes = app
                .filter
                .browse(app.catalog.recipes(), &profile, &query, &filters, limit);

            tracing::info!(query = %query, found = recipes.len(), "recipe search");

            for recipe in recipes {
                println!("{}", summary(recipe));
            }
        }
        RecipesCommand::Suggest { hour, limit } => {
            let profile = app.profiles.get().await?;
            let meal_time = hour.map(MealTime::from_hour).unwrap_or_else(MealTime::now);
            let limit = limit.unwrap_or(app.config.recipes.recommend_limit);
            let (title, subtitle) = meal_time.greeting();

            println!("{title}");
            println!("{subtitle}");
            for recipe in app
                .filter
                .recommend(app.catalog.recipes(), &profile, meal_time, limit)
            {
                println!("  {}", summary(recipe));
            }
        }
        RecipesCommand::Check { id } => {
            let recipe = find(app, &id)?;
            let profile = app.profiles.get().await?;

            let labels = profile
                .dietary_restrictions
                .iter()
                .chain(&profile.dietary_preferences);
            for label in labels {
                let verdict = if app.filter.violates_preference(recipe, label) {
                    "violates"
                } else {
                    "ok"
                };
                println!("{label:<16} {verdict}");
            }

            let admissible = app.filter.admits(recipe, &profile);
            println!("{}", if admissible { "admissible" } else { "excluded" });
        }
        RecipesCommand::Show { id } => {
            let recipe = find(app, &id)?;

            println!("{}", summary(recipe));
            if !recipe.description.is_empty() {
                println!("{}", recipe.description);
            }
            println!();
            for ingredient in &recipe.ingredients {
                match ingredient.quantity {
                    Some(quantity) => println!(
                        "- {} {} {}",
                        ingredient.name,
                        chefbuddy_shopping::format_quantity(quantity),
                        ingredient.unit
                    ),
                    None => println!("- {}", ingredient.name),
                }
            }
            println!();
            for (step, instruction) in recipe.instructions.iter().enumerate() {
                println!("{}. {instruction}", step + 1);
            }
        }
    }

    Ok(())
}

fn find<'a>(app: &'a App, id: &str) -> Result<&'a Recipe> {
    app.catalog
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("recipe {id} not found"))
}

fn summary(recipe: &Recipe) -> String {
    let calories = recipe.total_calories();
    if calories > 0.0 {
        format!(
            "{:>4}  {} ({}, {calories:.0} kcal)",
            recipe.id, recipe.name, recipe.cuisine_type
        )
    } else {
        format!("{:>4}  {} ({})", recipe.id, recipe.name, recipe.cuisine_type)
    }
}

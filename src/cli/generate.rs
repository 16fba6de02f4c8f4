use anyhow::{Result, bail};
use chefbuddy_client::{ClientError, GeneratedRecipe};
use clap::Args;

use super::split_list;
use crate::app::App;

#[derive(Args)]
pub struct GenerateArgs {
    /// What to cook, e.g. "quick vegan dinner"
    query: Option<String>,

    /// Pantry item ids to build one recipe around (comma separated)
    #[arg(long, conflicts_with = "query")]
    items: Vec<String>,
}

pub async fn run(app: &App, args: GenerateArgs) -> Result<()> {
    let client = app.client()?;
    let item_ids = split_list(&args.items);

    let recipe = if !item_ids.is_empty() {
        let result = client.multi_item_recipe(&item_ids).await.map_err(report)?;
        for used in &result.used_items {
            println!("using {} ({} days left)", used.name, used.days_left.unwrap_or_default());
        }
        result.recipe
    } else {
        match args.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                client.generate_recipe(query).await.map_err(report)?
            }
            _ => bail!("give a query or --items"),
        }
    };

    print_recipe(&recipe);

    Ok(())
}

fn report(err: ClientError) -> anyhow::Error {
    tracing::error!(error = %err, "recipe generation failed");
    anyhow::anyhow!(err.user_message())
}

fn print_recipe(recipe: &GeneratedRecipe) {
    println!("{}", recipe.title);
    if !recipe.subtitle.is_empty() {
        println!("{}", recipe.subtitle);
    }
    if let Some(servings) = recipe.servings_text() {
        println!("serves {servings}, {}", recipe.time);
    }
    if !recipe.description.is_empty() {
        println!("\n{}", recipe.description);
    }

    println!();
    for ingredient in &recipe.ingredients {
        println!("- {} {}", ingredient.amount, ingredient.name);
    }

    println!();
    for (step, text) in recipe.steps.iter().enumerate() {
        println!("{}. {text}", step + 1);
    }

    for tip in &recipe.suggestions {
        println!("tip: {tip}");
    }
    for link in &recipe.youtube_links {
        println!("{link}");
    }
}

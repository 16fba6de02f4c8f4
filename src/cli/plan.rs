use anyhow::{Result, anyhow};
use chefbuddy_mealplan::calendar;
use clap::Subcommand;
use time::{Date, Month};

use super::parse_date_arg;
use crate::app::App;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Plan a recipe on a day
    Add {
        #[arg(value_parser = parse_date_arg)]
        date: Date,
        recipe_id: String,
    },
    /// Remove the entry at a position (0-based) from a day
    Remove {
        #[arg(value_parser = parse_date_arg)]
        date: Date,
        index: usize,
    },
    /// Recipes and calories for a day
    Show {
        #[arg(value_parser = parse_date_arg)]
        date: Date,
    },
    /// Month calendar with the number of planned recipes per day
    Month {
        year: i32,
        /// 1-12
        month: u8,
    },
    /// Put a recipe's ingredients on the shopping list
    Shop { recipe_id: String },
}

pub async fn run(app: &App, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Add { date, recipe_id } => {
            if app.catalog.find(&recipe_id).is_none() {
                tracing::warn!(recipe_id, "planning a recipe missing from the catalog");
            }
            let planned = app.planner.add_recipe(date, &recipe_id).await?;
            println!("{date}: {} planned", planned.len());
        }
        PlanCommand::Remove { date, index } => {
            let removed = app.planner.remove_recipe(date, index).await?;
            println!("removed {}", removed.id);
        }
        PlanCommand::Show { date } => {
            for recipe in app.planner.recipes_for_day(date, &app.catalog).await? {
                println!("{:>4}  {}", recipe.id, recipe.name);
            }
            let calories = app.planner.total_calories(date, &app.catalog).await?;
            println!("total: {calories:.0} kcal");
        }
        PlanCommand::Month { year, month } => {
            let month = Month::try_from(month).map_err(|_| anyhow!("month must be 1-12"))?;
            print_month(app, year, month).await?;
        }
        PlanCommand::Shop { recipe_id } => {
            let recipe = app
                .catalog
                .find(&recipe_id)
                .ok_or_else(|| anyhow!("recipe {recipe_id} not found"))?;
            let touched = app
                .planner
                .add_recipe_to_shopping(recipe, &app.shopping)
                .await?;
            println!("{} shopping lines updated", touched.len());
        }
    }

    Ok(())
}

async fn print_month(app: &App, year: i32, month: Month) -> Result<()> {
    let plans = app.planner.plans_in_month(year, month).await?;
    let grid = calendar::month_grid(year, month)?;
    let (prev_year, prev_month) = calendar::previous_month(year, month);
    let (next_year, next_month) = calendar::next_month(year, month);

    println!("< {prev_month} {prev_year}    {month} {year}    {next_month} {next_year} >");
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for week in grid.chunks(7) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => match plans.get(day) {
                    Some(planned) => format!("{:>2}*{}", day.day(), planned.len()),
                    None => format!("{:>4}", day.day()),
                },
                None => "    ".to_string(),
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    Ok(())
}

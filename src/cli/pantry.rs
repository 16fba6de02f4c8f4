use anyhow::Result;
use chefbuddy_pantry::{ClassifiedItem, FoodCategory, FoodItem, NewFoodItem, UrgencyTier};
use clap::Subcommand;
use time::Date;
use validator::Validate;

use super::parse_date_arg;
use crate::app::App;

#[derive(Subcommand)]
pub enum PantryCommand {
    /// List items grouped by urgency
    List {
        /// Read items from the backend instead of the local store
        #[arg(long)]
        remote: bool,

        /// Reference date (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<Date>,
    },
    /// Add an item
    Add {
        name: String,

        /// dairy, vegetables, fruits, meat, packaged, spices, bakery, frozen, produce, pantry
        category: FoodCategory,

        /// Purchase date (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        purchased: Option<Date>,

        #[arg(long, default_value_t = 1)]
        quantity: u32,

        #[arg(long)]
        notes: Option<String>,

        /// Also create the item on the backend
        #[arg(long)]
        remote: bool,
    },
    /// Remove an item
    Remove {
        id: String,

        #[arg(long)]
        remote: bool,
    },
    /// Items that expire within the alert window
    Alerts {
        /// Alert window in days (defaults to the configured value)
        #[arg(long)]
        days: Option<i64>,

        #[arg(long, value_parser = parse_date_arg)]
        today: Option<Date>,
    },
    /// Ask the backend for advice on using an item
    Advice { id: String },
}

pub async fn run(app: &App, command: PantryCommand) -> Result<()> {
    match command {
        PantryCommand::List { remote, today } => {
            let items = if remote {
                app.client()?.list_items().await?
            } else {
                app.pantry.list().await?
            };
            print_groups(app, &items, today.unwrap_or_else(chefbuddy_shared::today));
        }
        PantryCommand::Add {
            name,
            category,
            purchased,
            quantity,
            notes,
            remote,
        } => {
            let mut input = NewFoodItem::new(
                name,
                category,
                purchased.unwrap_or_else(chefbuddy_shared::today),
            )
            .quantity(quantity);
            if let Some(notes) = notes {
                input = input.notes(notes);
            }

            input.validate()?;

            let item = if remote {
                app.client()?.create_item(&input).await?
            } else {
                app.pantry.add(input).await?
            };
            println!("{}", item.id);
        }
        PantryCommand::Remove { id, remote } => {
            if remote {
                app.client()?.delete_item(&id).await?;
            } else {
                app.pantry.delete(&id).await?;
            }
        }
        PantryCommand::Alerts { days, today } => {
            let days = days.unwrap_or(app.config.pantry.alert_days);
            let today = today.unwrap_or_else(chefbuddy_shared::today);
            let items = app.pantry.list().await?;

            for classified in app.classifier.expiring_within(&items, today, days) {
                tracing::warn!(
                    id = %classified.item.id,
                    name = %classified.item.name,
                    days_left = classified.prediction.days_left,
                    "item expiring soon"
                );
                println!("{}", line(&classified));
            }
        }
        PantryCommand::Advice { id } => {
            if let Some(item) = app.pantry.get(&id).await? {
                let context = app
                    .classifier
                    .classify_item(&item, chefbuddy_shared::today())
                    .advice_context();
                tracing::debug!(?context, "requesting advice");
            }

            let advice = app.client()?.item_advice(&id).await?;
            if let Some(days_left) = advice.days_left {
                println!("{days_left} days left");
            }
            println!("{}", advice.advice);
        }
    }

    Ok(())
}

fn line(classified: &ClassifiedItem<'_>) -> String {
    let item = classified.item;
    let days_left = classified.prediction.days_left;

    format!(
        "{:<12} {:<24} {:>4}d  {:<10} x{}  {}",
        classified.tier().label(),
        item.name,
        days_left,
        item.category.as_str(),
        item.quantity,
        item.id
    )
}

fn print_groups(app: &App, items: &[FoodItem], today: Date) {
    let groups = app.classifier.group_by_urgency(items, today);

    for (tier, members) in groups.iter() {
        if members.is_empty() {
            continue;
        }
        println!("{} ({})", tier_heading(tier), members.len());
        for classified in members {
            println!("  {}", line(classified));
        }
    }
}

fn tier_heading(tier: UrgencyTier) -> &'static str {
    match tier {
        UrgencyTier::Critical => "Critical",
        UrgencyTier::Urgent => "Urgent",
        UrgencyTier::Warning => "Warning",
        UrgencyTier::Fresh => "Fresh",
    }
}

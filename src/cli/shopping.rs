use anyhow::Result;
use chefbuddy_shopping::{NewShoppingItem, format_quantity};
use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Show the list
    List,
    /// Add a line, merging with an existing one of the same name and unit
    Add {
        name: String,

        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Check or uncheck a line
    Toggle { id: String },
    /// Remove a line
    Remove { id: String },
    /// Remove every line
    Clear,
    /// Print the list as plain text
    Export,
}

pub async fn run(app: &App, command: ShoppingCommand) -> Result<()> {
    match command {
        ShoppingCommand::List => {
            for item in app.shopping.items().await? {
                let mark = if item.checked { "x" } else { " " };
                println!(
                    "[{mark}] {} {} {}  {}",
                    item.name,
                    format_quantity(item.quantity),
                    item.unit,
                    item.id
                );
            }
        }
        ShoppingCommand::Add {
            name,
            quantity,
            unit,
        } => {
            let item = app
                .shopping
                .add_item(NewShoppingItem::new(name, quantity, unit))
                .await?;
            println!("{}", item.id);
        }
        ShoppingCommand::Toggle { id } => {
            let checked = app.shopping.toggle(&id).await?;
            println!("{}", if checked { "checked" } else { "unchecked" });
        }
        ShoppingCommand::Remove { id } => app.shopping.remove(&id).await?,
        ShoppingCommand::Clear => app.shopping.clear().await?,
        ShoppingCommand::Export => println!("{}", app.shopping.export_text().await?),
    }

    Ok(())
}

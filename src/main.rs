use anyhow::Result;
use chefbuddy::{
    App,
    cli::{
        generate::{self, GenerateArgs},
        pantry::{self, PantryCommand},
        plan::{self, PlanCommand},
        profile::{self, ProfileCommand},
        recipes::{self, RecipesCommand},
        shopping::{self, ShoppingCommand},
    },
};
use chefbuddy_client::ClientError;
use clap::{Parser, Subcommand};

/// chefbuddy - pantry tracking and meal planning
#[derive(Parser)]
#[command(name = "chefbuddy")]
#[command(about = "Track what expires, find recipes that fit, plan the week", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pantry items and expiry alerts
    #[command(subcommand)]
    Pantry(PantryCommand),
    /// Browse and check recipes
    #[command(subcommand)]
    Recipes(RecipesCommand),
    /// Dietary profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Meal calendar
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Shopping list
    #[command(subcommand)]
    Shopping(ShoppingCommand),
    /// Ask the backend for a recipe
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = chefbuddy::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    chefbuddy::observability::init_observability(&config.logging.level, config.logging.format)?;

    let app = App::connect(config).await?;

    let result = match cli.command {
        Commands::Pantry(command) => pantry::run(&app, command).await,
        Commands::Recipes(command) => recipes::run(&app, command).await,
        Commands::Profile(command) => profile::run(&app, command).await,
        Commands::Plan(command) => plan::run(&app, command).await,
        Commands::Shopping(command) => shopping::run(&app, command).await,
        Commands::Generate(args) => generate::run(&app, args).await,
    };

    result.map_err(|err| match err.downcast_ref::<ClientError>() {
        Some(client) => {
            tracing::error!(error = %client, "backend request failed");
            anyhow::anyhow!(client.user_message())
        }
        None => err,
    })
}

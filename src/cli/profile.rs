use anyhow::Result;
use chefbuddy_shared::user::BudgetTier;
use clap::Subcommand;

use super::split_list;
use crate::app::App;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print the stored profile
    Show,
    /// Replace the profile's preferences
    Set {
        /// Dietary preference such as Vegan (repeatable, comma separated)
        #[arg(long = "preference")]
        preferences: Vec<String>,

        /// Dietary restriction such as Nuts (repeatable, comma separated)
        #[arg(long = "restriction")]
        restrictions: Vec<String>,

        #[arg(long = "goal")]
        health_goals: Vec<String>,

        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        #[arg(long)]
        household_size: Option<u16>,

        /// low, medium or high
        #[arg(long)]
        budget: Option<BudgetTier>,

        #[arg(long)]
        skill_level: Option<String>,

        /// Also push the profile to the backend (needs api.token)
        #[arg(long)]
        sync: bool,
    },
}

pub async fn run(app: &App, command: ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Show => {
            let profile = app.profiles.get().await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileCommand::Set {
            preferences,
            restrictions,
            health_goals,
            cuisines,
            household_size,
            budget,
            skill_level,
            sync,
        } => {
            let current = app.profiles.get().await?;
            let mut profile = current
                .with_preferences(split_list(&preferences))
                .with_restrictions(split_list(&restrictions));
            profile.health_goals = split_list(&health_goals);
            profile.cuisines = split_list(&cuisines);
            profile.budget = budget;
            profile.skill_level = skill_level;
            if let Some(household_size) = household_size {
                profile.household_size = household_size;
            }

            let saved = app.profiles.update_preferences(profile).await?;

            if sync {
                app.client()?.update_preferences(&saved).await?;
                tracing::info!("profile synced to backend");
            }

            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
    }

    Ok(())
}

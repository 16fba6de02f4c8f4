use anyhow::Result;
use chefbuddy_client::ApiClient;
use chefbuddy_mealplan::MealPlanner;
use chefbuddy_pantry::{ExpiryClassifier, PantryRepository, ShelfLifeTable};
use chefbuddy_recipe::{DietaryFilter, RecipeCatalog};
use chefbuddy_shared::{SqliteStore, user::ProfileRepository};
use chefbuddy_shopping::ShoppingList;

use crate::config::Config;

/// Everything a command needs, wired from configuration.
pub struct App {
    pub config: Config,
    pub store: SqliteStore,
    pub pantry: PantryRepository<SqliteStore>,
    pub profiles: ProfileRepository<SqliteStore>,
    pub planner: MealPlanner<SqliteStore>,
    pub shopping: ShoppingList<SqliteStore>,
    pub classifier: ExpiryClassifier,
    pub filter: DietaryFilter,
    pub catalog: RecipeCatalog,
}

impl App {
    #[tracing::instrument(skip_all, fields(database = %config.database.url))]
    pub async fn connect(config: Config) -> Result<Self> {
        let store =
            SqliteStore::connect(&config.database.url, config.database.max_connections).await?;

        let mut table = ShelfLifeTable::default().with_overrides(
            config
                .pantry
                .shelf_life
                .iter()
                .map(|(category, days)| (category, *days)),
        );
        if let Some(days) = config.pantry.fallback_days {
            table = table.with_fallback(days);
        }

        let filter = match &config.dietary_keywords {
            Some(keywords) => DietaryFilter::new(keywords.clone()),
            None => DietaryFilter::default(),
        };

        let catalog = match &config.recipes.catalog {
            Some(path) => RecipeCatalog::load(path)?,
            None => RecipeCatalog::bundled()?,
        };

        tracing::debug!(
            recipes = catalog.len(),
            keywords_version = filter.keywords().version,
            "app ready"
        );

        Ok(Self {
            pantry: PantryRepository::new(store.clone()),
            profiles: ProfileRepository::new(store.clone()),
            planner: MealPlanner::new(store.clone()),
            shopping: ShoppingList::new(store.clone()),
            classifier: ExpiryClassifier::new(table),
            filter,
            catalog,
            store,
            config,
        })
    }

    /// Backend client, authenticated when a token is configured.
    pub fn client(&self) -> Result<ApiClient> {
        let client = ApiClient::new(&self.config.api.base_url)?;

        Ok(match &self.config.api.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }
}

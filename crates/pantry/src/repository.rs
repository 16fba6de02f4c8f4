use chefbuddy_shared::{
    Result, Store,
    food::{FoodItem, NewFoodItem},
    not_found,
    store::Documents,
};
use ulid::Ulid;
use validator::Validate;

/// Pantry items kept in a [`Store`].
pub struct PantryRepository<S> {
    items: Documents<S, FoodItem>,
}

impl<S: Store> PantryRepository<S> {
    pub const COLLECTION: &'static str = "pantry_items";

    pub fn new(store: S) -> Self {
        Self {
            items: Documents::new(store, Self::COLLECTION),
        }
    }

    /// Items in the order they were added.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<FoodItem>> {
        self.items.all().await
    }

    pub async fn get(&self, id: &str) -> Result<Option<FoodItem>> {
        self.items.get(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add(&self, mut input: NewFoodItem) -> Result<FoodItem> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let item = input.into_item(Ulid::new().to_string());
        self.items.put(&item.id, &item).await?;

        tracing::info!(id = %item.id, name = %item.name, category = %item.category, "pantry item added");

        Ok(item)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.items.delete(id).await? {
            not_found!("pantry item {id}");
        }

        tracing::info!(id, "pantry item deleted");

        Ok(())
    }
}

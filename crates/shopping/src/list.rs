use chefbuddy_shared::{
    Result, Store, not_found, recipe::Ingredient, shopping::ShoppingItem, store::Documents,
};
use ulid::Ulid;
use validator::Validate;

/// Manual entry on the shopping list.
#[derive(Clone, Debug, Validate)]
pub struct NewShoppingItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    pub unit: String,
}

impl NewShoppingItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Render a quantity without trailing zeros: `2`, `0.5`, `1.25`.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        return format!("{}", quantity as i64);
    }

    let formatted = format!("{quantity:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Shopping list kept in a [`Store`], one document per line.
pub struct ShoppingList<S> {
    items: Documents<S, ShoppingItem>,
}

impl<S: Store> ShoppingList<S> {
    pub const COLLECTION: &'static str = "shopping_items";

    pub fn new(store: S) -> Self {
        Self {
            items: Documents::new(store, Self::COLLECTION),
        }
    }

    /// Lines in the order they were first added.
    pub async fn items(&self) -> Result<Vec<ShoppingItem>> {
        self.items.all().await
    }

    /// Merge ingredients into the list.
    ///
    /// An ingredient joins an existing line with the same name and unit
    /// (ignoring case) and adds its quantity; a missing, non-finite or
    /// non-positive quantity counts as one. Blank names are ignored.
    #[tracing::instrument(skip_all, fields(ingredients = ingredients.len()))]
    pub async fn add_ingredients(&self, ingredients: &[Ingredient]) -> Result<Vec<ShoppingItem>> {
        let mut items = self.items.all().await?;
        let mut touched = Vec::new();

        for ingredient in ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }

            let quantity = ingredient
                .quantity
                .filter(|quantity| quantity.is_finite() && *quantity > 0.0)
                .unwrap_or(1.0);
            let unit = ingredient.unit.trim();

            let index = match items.iter().position(|item| item.same_line(name, unit)) {
                Some(index) => {
                    items[index].quantity += quantity;
                    index
                }
                None => {
                    items.push(ShoppingItem {
                        id: Ulid::new().to_string(),
                        name: name.to_owned(),
                        quantity,
                        unit: unit.to_owned(),
                        checked: false,
                    });
                    items.len() - 1
                }
            };

            if !touched.contains(&index) {
                touched.push(index);
            }
        }

        for &index in &touched {
            let item = &items[index];
            self.items.put(&item.id, item).await?;
        }

        tracing::info!(lines = touched.len(), "shopping list updated");

        Ok(touched.into_iter().map(|index| items[index].clone()).collect())
    }

    /// Add one line by hand. Merges like [`Self::add_ingredients`].
    pub async fn add_item(&self, mut input: NewShoppingItem) -> Result<ShoppingItem> {
        input.name = input.name.trim().to_owned();
        input.validate()?;

        let ingredient = Ingredient::new(input.name, input.quantity, input.unit);
        let mut merged = self.add_ingredients(std::slice::from_ref(&ingredient)).await?;

        match merged.pop() {
            Some(item) => Ok(item),
            None => chefbuddy_shared::bail!("shopping item {} was not stored", ingredient.name),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<()> {
        if !self.items.delete(id).await? {
            not_found!("shopping item {id}");
        }

        Ok(())
    }

    /// Flip the checked flag and return the new state.
    #[tracing::instrument(skip(self))]
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let Some(mut item) = self.items.get(id).await? else {
            not_found!("shopping item {id}");
        };

        item.checked = !item.checked;
        self.items.put(id, &item).await?;

        Ok(item.checked)
    }

    pub async fn clear(&self) -> Result<()> {
        self.items.clear().await?;

        tracing::info!("shopping list cleared");

        Ok(())
    }

    /// Plain-text export, one `- name qty unit` line per item.
    pub async fn export_text(&self) -> Result<String> {
        let lines = self
            .items()
            .await?
            .iter()
            .map(|item| {
                let quantity = format_quantity(item.quantity);
                if item.unit.is_empty() {
                    format!("- {} {quantity}", item.name)
                } else {
                    format!("- {} {quantity} {}", item.name, item.unit)
                }
            })
            .collect::<Vec<_>>();

        Ok(lines.join("\n"))
    }
}

use std::path::Path;

use chefbuddy_shared::{Result, recipe::Recipe};

const BUNDLED: &str = include_str!("../data/recipes.json");

/// Read-only list of recipes, kept in file order.
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parses a JSON array of recipes.
    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Ok(Self::new(recipes))
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::debug!(recipes = catalog.recipes.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Sample catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = RecipeCatalog::bundled().unwrap();

        assert_eq!(catalog.len(), 10);
        assert_eq!(
            catalog.find("2").map(|r| r.name.as_str()),
            Some("Tofu Fried Rice")
        );
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RecipeCatalog::from_json("{not json").is_err());
    }
}

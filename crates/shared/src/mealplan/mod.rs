use serde::{Deserialize, Serialize};

/// A recipe placed on one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRecipe {
    pub id: String,
}

impl PlannedRecipe {
    pub fn new(recipe_id: impl Into<String>) -> Self {
        Self {
            id: recipe_id.into(),
        }
    }
}

use chefbuddy_shared::food::FoodItem;
use serde::{Deserialize, Serialize};

/// Advice text for one item, with the server's days-left figure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub days_left: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedIngredient {
    pub name: String,
    pub amount: String,
}

/// Recipe produced by the generation endpoints. Every field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub servings: Option<serde_json::Value>,
    pub time: String,
    pub ingredients: Vec<GeneratedIngredient>,
    pub steps: Vec<String>,
    pub suggestions: Vec<String>,
    pub youtube_links: Vec<String>,
}

impl GeneratedRecipe {
    /// `"4"` and `4` both render as `4`.
    pub fn servings_text(&self) -> Option<String> {
        match self.servings.as_ref()? {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UsedItem {
    pub name: String,
    pub category: String,
    pub days_left: Option<i64>,
}

/// One recipe built around several near-expiry items.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiItemRecipe {
    pub recipe: GeneratedRecipe,
    pub used_items: Vec<UsedItem>,
}

#[derive(Deserialize)]
pub(crate) struct RecipeEnvelope {
    #[serde(default)]
    pub recipe: GeneratedRecipe,
}

#[derive(Deserialize)]
pub(crate) struct CreatedItem {
    pub item: FoodItem,
}

#[derive(Serialize)]
pub(crate) struct MultiItemRequest<'a> {
    pub item_ids: &'a [String],
}

#[derive(Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub query: &'a str,
}

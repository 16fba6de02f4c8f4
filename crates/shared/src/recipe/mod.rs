use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "qty", deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: unit.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

/// A catalog or generated recipe. Every field tolerates being absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub cuisine_type: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutrition: Option<Nutrition>,
    #[serde(deserialize_with = "lenient_quantity")]
    pub calories: Option<f64>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine_type = cuisine.into();
        self
    }

    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Calories per serving, preferring the nutrition facts when present.
    pub fn total_calories(&self) -> f64 {
        self.nutrition
            .as_ref()
            .and_then(|n| n.calories)
            .or(self.calories)
            .unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Only finite, positive amounts survive; anything else reads as "no quantity".
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let quantity = match Option::<NumberOrText>::deserialize(deserializer).unwrap_or(None) {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    };

    Ok(quantity.filter(|quantity| quantity.is_finite() && *quantity > 0.0))
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(
        match Option::<NumberOrText>::deserialize(deserializer).unwrap_or(None) {
            Some(NumberOrText::Number(value)) => value.to_string(),
            Some(NumberOrText::Text(text)) => text,
            None => String::new(),
        },
    )
}

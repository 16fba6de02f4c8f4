use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::Date;
use validator::{Validate, ValidationError};

/// Storage category of a pantry item.
///
/// Parsing never fails: unknown names are kept in [`FoodCategory::Other`] so
/// the shelf-life table can fall back to its default.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoodCategory {
    Dairy,
    Vegetables,
    Fruits,
    Meat,
    Packaged,
    Spices,
    Bakery,
    Frozen,
    Produce,
    Pantry,
    Other(String),
}

impl FoodCategory {
    pub const KNOWN: [FoodCategory; 10] = [
        FoodCategory::Dairy,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Meat,
        FoodCategory::Packaged,
        FoodCategory::Spices,
        FoodCategory::Bakery,
        FoodCategory::Frozen,
        FoodCategory::Produce,
        FoodCategory::Pantry,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FoodCategory::Dairy => "dairy",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Meat => "meat",
            FoodCategory::Packaged => "packaged",
            FoodCategory::Spices => "spices",
            FoodCategory::Bakery => "bakery",
            FoodCategory::Frozen => "frozen",
            FoodCategory::Produce => "produce",
            FoodCategory::Pantry => "pantry",
            FoodCategory::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FoodCategory::Other(_))
    }
}

impl FromStr for FoodCategory {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();

        Ok(Self::KNOWN
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .unwrap_or(FoodCategory::Other(normalized)))
    }
}

impl From<String> for FoodCategory {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<FoodCategory> for String {
    fn from(value: FoodCategory) -> Self {
        value.as_str().to_owned()
    }
}

impl Default for FoodCategory {
    /// Uncategorized; classified with the shelf-life fallback.
    fn default() -> Self {
        FoodCategory::Other(String::new())
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_quantity() -> u32 {
    1
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

fn lenient_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FoodCategory, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => FoodCategory::from(name),
        _ => FoodCategory::default(),
    })
}

/// Null, non-numeric and values below one all count as a single unit.
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(value
        .filter(|quantity| quantity.is_finite() && *quantity >= 1.0)
        .map(|quantity| quantity.min(f64::from(u32::MAX)) as u32)
        .unwrap_or_else(default_quantity))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("Item name is required")));
    }
    Ok(())
}

/// A stored pantry item. Items are immutable once stored; they are only
/// created and deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: FoodCategory,
    #[serde(with = "crate::iso_date")]
    pub purchase_date: Date,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for creating a pantry item; the id is assigned on insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub category: FoodCategory,
    #[serde(with = "crate::iso_date")]
    pub purchase_date: Date,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewFoodItem {
    pub fn new(name: impl Into<String>, category: FoodCategory, purchase_date: Date) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            category,
            purchase_date,
            quantity: default_quantity(),
            notes: None,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn into_item(self, id: impl Into<String>) -> FoodItem {
        FoodItem {
            id: id.into(),
            name: self.name.trim().to_owned(),
            category: self.category,
            purchase_date: self.purchase_date,
            quantity: self.quantity,
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn category_parsing_is_case_insensitive() {
        assert_eq!("Dairy".parse::<FoodCategory>(), Ok(FoodCategory::Dairy));
        assert_eq!(" MEAT ".parse::<FoodCategory>(), Ok(FoodCategory::Meat));
        assert_eq!(
            "seafood".parse::<FoodCategory>(),
            Ok(FoodCategory::Other("seafood".to_owned()))
        );
    }

    #[test]
    fn item_json_uses_wire_field_names() {
        let item: FoodItem = serde_json::from_str(
            r#"{"_id":"a1","name":"Milk","category":"Dairy","purchaseDate":"2025-03-01T08:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(item.id, "a1");
        assert_eq!(item.category, FoodCategory::Dairy);
        assert_eq!(item.purchase_date, date!(2025 - 03 - 01));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.notes, None);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["purchaseDate"], "2025-03-01");
        assert_eq!(json["category"], "dairy");
    }

    #[test]
    fn item_json_defaults_null_and_missing_fields() {
        let items: Vec<FoodItem> = serde_json::from_str(
            r#"[
                {"_id":"1","name":null,"purchaseDate":"2025-03-01","quantity":null,"notes":null},
                {"_id":"2","name":"Eggs","category":null,"purchaseDate":"2025-03-01","quantity":"6"},
                {"_id":"3","name":"Rice","category":"pantry","purchaseDate":"2025-03-01","quantity":-2}
            ]"#,
        )
        .unwrap();

        assert_eq!(items[0].name, "");
        assert_eq!(items[0].category, FoodCategory::default());
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].category, FoodCategory::default());
        assert_eq!(items[1].quantity, 6);
        assert_eq!(items[2].quantity, 1);
    }

    #[test]
    fn deserialized_blank_name_is_rejected() {
        let input: NewFoodItem = serde_json::from_str(
            r#"{"name":"   ","category":"dairy","purchaseDate":"2025-03-01"}"#,
        )
        .unwrap();

        assert!(input.validate().is_err());
    }

    #[test]
    fn new_item_validation() {
        let valid = NewFoodItem::new("Eggs", FoodCategory::Dairy, date!(2025 - 03 - 01));
        assert!(valid.validate().is_ok());

        let blank = NewFoodItem::new("   ", FoodCategory::Dairy, date!(2025 - 03 - 01));
        assert!(blank.validate().is_err());

        let empty = NewFoodItem::new("Eggs", FoodCategory::Dairy, date!(2025 - 03 - 01)).quantity(0);
        assert!(empty.validate().is_err());
    }
}

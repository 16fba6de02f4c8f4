use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    /// Items with the same name and unit (ignoring case) are one line.
    pub fn same_line(&self, name: &str, unit: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
            && self.unit.trim().to_lowercase() == unit.trim().to_lowercase()
    }
}

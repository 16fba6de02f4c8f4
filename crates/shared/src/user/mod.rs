mod repository;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

pub use repository::ProfileRepository;

fn default_household_size() -> u16 {
    1
}

/// Dietary and household preferences of one user.
///
/// Labels are kept as free text (`"Vegan"`, `"Nuts"`, `"Gluten-free"`); the
/// recipe filter decides which ones it recognizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserProfile {
    pub dietary_preferences: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    #[validate(range(min = 1, message = "Household size must be at least 1"))]
    pub household_size: u16,
    pub budget: Option<BudgetTier>,
    pub health_goals: Vec<String>,
    pub skill_level: Option<String>,
    pub cuisines: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            dietary_preferences: vec![],
            dietary_restrictions: vec![],
            household_size: default_household_size(),
            budget: None,
            health_goals: vec![],
            skill_level: None,
            cuisines: vec![],
        }
    }
}

impl UserProfile {
    pub fn with_preferences<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_preferences = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_restrictions<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Drop blank labels and case-insensitive duplicates, keeping first
    /// spelling. Profile labels behave as sets.
    pub fn normalized(mut self) -> Self {
        dedup_labels(&mut self.dietary_preferences);
        dedup_labels(&mut self.dietary_restrictions);
        dedup_labels(&mut self.health_goals);
        dedup_labels(&mut self.cuisines);
        self
    }
}

fn dedup_labels(labels: &mut Vec<String>) {
    let mut seen = Vec::<String>::with_capacity(labels.len());

    labels.retain_mut(|label| {
        *label = label.trim().to_owned();
        let key = label.to_lowercase();
        if label.is_empty() || seen.contains(&key) {
            return false;
        }
        seen.push(key);
        true
    });
}

use chefbuddy_shared::{recipe::Recipe, user::UserProfile};

use crate::{keywords::DietaryKeywords, meal_time::MealTime};

/// Default number of recipes shown by [`DietaryFilter::browse`].
pub const DEFAULT_BROWSE_LIMIT: usize = 12;

/// Default number of recipes returned by [`DietaryFilter::recommend`].
pub const DEFAULT_RECOMMEND_LIMIT: usize = 4;

/// Lower-cased `name cuisine description ingredient...` text used by every
/// matcher in this module.
pub fn search_text(recipe: &Recipe) -> String {
    let mut text = String::with_capacity(
        recipe.name.len() + recipe.cuisine_type.len() + recipe.description.len() + 32,
    );
    text.push_str(&recipe.name);
    text.push(' ');
    text.push_str(&recipe.cuisine_type);
    text.push(' ');
    text.push_str(&recipe.description);
    text.push(' ');

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    text.push_str(&ingredients);

    text.to_lowercase()
}

/// True when any keyword appears as a substring of the recipe's search text.
pub fn matches_keyword<S: AsRef<str>>(recipe: &Recipe, keywords: &[S]) -> bool {
    contains_any(&search_text(recipe), keywords)
}

/// Recipes whose search text contains `query`, case-insensitively.
///
/// A blank query returns every recipe.
pub fn search_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| search_text(recipe).contains(&query))
        .collect()
}

fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| text.contains(keyword))
}

/// A recognised dietary label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DietaryRule {
    Vegan,
    Vegetarian,
    Pescatarian,
    GlutenFree,
    DairyFree,
    NutFree,
    Halal,
    Kosher,
}

impl DietaryRule {
    /// Parses a preference or restriction label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let rule = match label.trim().to_lowercase().as_str() {
            "vegan" => Self::Vegan,
            "vegetarian" => Self::Vegetarian,
            "pescatarian" => Self::Pescatarian,
            "gluten-free" | "gluten free" | "gluten" => Self::GlutenFree,
            "dairy-free" | "dairy free" | "dairy" => Self::DairyFree,
            "nut-free" | "nut free" | "nuts" => Self::NutFree,
            "halal" => Self::Halal,
            "kosher" => Self::Kosher,
            _ => return None,
        };

        Some(rule)
    }

    fn is_violated_by(self, text: &str, keywords: &DietaryKeywords) -> bool {
        match self {
            Self::Vegan => {
                contains_any(text, &keywords.meat)
                    || contains_any(text, &keywords.fish)
                    || contains_any(text, &keywords.dairy)
            }
            Self::Vegetarian => {
                contains_any(text, &keywords.meat) || contains_any(text, &keywords.fish)
            }
            Self::Pescatarian => contains_any(text, &keywords.meat),
            Self::GlutenFree => contains_any(text, &keywords.gluten),
            Self::DairyFree => contains_any(text, &keywords.dairy),
            Self::NutFree => contains_any(text, &keywords.nuts),
            Self::Halal => contains_any(text, &keywords.pork),
            Self::Kosher => {
                contains_any(text, &keywords.pork) || contains_any(text, &keywords.shellfish)
            }
        }
    }
}

/// Keyword-driven admissibility checks for recipes against a user profile.
#[derive(Clone, Debug, Default)]
pub struct DietaryFilter {
    keywords: DietaryKeywords,
}

impl DietaryFilter {
    pub fn new(keywords: DietaryKeywords) -> Self {
        Self {
            keywords: keywords.normalized(),
        }
    }

    pub fn keywords(&self) -> &DietaryKeywords {
        &self.keywords
    }

    pub fn violates_preference(&self, recipe: &Recipe, label: &str) -> bool {
        self.violates(&search_text(recipe), label)
    }

    fn violates(&self, text: &str, label: &str) -> bool {
        match DietaryRule::parse(label) {
            Some(rule) => rule.is_violated_by(text, &self.keywords),
            None => {
                // Unknown labels admit everything.
                tracing::debug!(label, "unrecognised dietary label");
                false
            }
        }
    }

    fn violates_any<S: AsRef<str>>(&self, text: &str, labels: &[S]) -> bool {
        labels.iter().any(|label| self.violates(text, label.as_ref()))
    }

    /// True when the recipe breaks none of the profile's restrictions and
    /// preferences.
    pub fn admits(&self, recipe: &Recipe, profile: &UserProfile) -> bool {
        self.admits_with(recipe, profile, &[] as &[&str])
    }

    fn admits_with<S: AsRef<str>>(
        &self,
        recipe: &Recipe,
        profile: &UserProfile,
        filters: &[S],
    ) -> bool {
        let text = search_text(recipe);

        !self.violates_any(&text, &profile.dietary_restrictions)
            && !self.violates_any(&text, &profile.dietary_preferences)
            && !self.violates_any(&text, filters)
    }

    /// Keeps recipes that violate no restriction, no preference and no active
    /// filter label. Input order is preserved.
    pub fn filter_recipes<'a, S: AsRef<str>>(
        &self,
        recipes: &'a [Recipe],
        profile: &UserProfile,
        filters: &[S],
    ) -> Vec<&'a Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.admits_with(recipe, profile, filters))
            .collect()
    }

    /// Search, then filter, then truncate to `limit`.
    pub fn browse<'a, S: AsRef<str>>(
        &self,
        recipes: &'a [Recipe],
        profile: &UserProfile,
        query: &str,
        filters: &[S],
        limit: usize,
    ) -> Vec<&'a Recipe> {
        let query = query.trim().to_lowercase();

        recipes
            .iter()
            .filter(|recipe| {
                let text = search_text(recipe);
                text.contains(&query)
                    && !self.violates_any(&text, &profile.dietary_restrictions)
                    && !self.violates_any(&text, &profile.dietary_preferences)
                    && !self.violates_any(&text, filters)
            })
            .take(limit)
            .collect()
    }

    /// Admissible recipes that match the meal time's keywords, in catalog
    /// order.
    pub fn recommend<'a>(
        &self,
        recipes: &'a [Recipe],
        profile: &UserProfile,
        meal_time: MealTime,
        limit: usize,
    ) -> Vec<&'a Recipe> {
        recipes
            .iter()
            .filter(|recipe| {
                let text = search_text(recipe);
                contains_any(&text, meal_time.keywords())
                    && !self.violates_any(&text, &profile.dietary_restrictions)
                    && !self.violates_any(&text, &profile.dietary_preferences)
            })
            .take(limit)
            .collect()
    }
}

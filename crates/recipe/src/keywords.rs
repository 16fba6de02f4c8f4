use serde::{Deserialize, Serialize};

/// Bump whenever a default list below changes; fixtures pin against it.
pub const KEYWORDS_VERSION: u32 = 1;

const MEAT: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "lamb",
    "steak",
    "bacon",
    "ham",
    "turkey",
    "sausage",
    "ribeye",
    "ground beef",
    "meat",
];

const FISH: &[&str] = &[
    "salmon", "tuna", "trout", "tilapia", "cod", "shrimp", "prawn", "prawns", "crab", "lobster",
    "anchovy", "sardine",
];

const DAIRY: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "yogurt",
    "cream",
    "feta",
    "parmesan",
    "mozzarella",
    "egg",
    "eggs",
    "honey",
];

const GLUTEN: &[&str] = &[
    "wheat",
    "flour",
    "pasta",
    "bread",
    "breadcrumbs",
    "semolina",
    "spaghetti",
    "noodle",
];

const NUTS: &[&str] = &[
    "peanut",
    "peanuts",
    "almond",
    "almonds",
    "walnut",
    "walnuts",
    "cashew",
    "cashews",
    "pistachio",
    "hazelnut",
    "nut",
    "pecan",
];

const SHELLFISH: &[&str] = &["shrimp", "prawn", "prawns", "crab", "lobster", "mussel", "oyster"];

const PORK: &[&str] = &["pork", "ham", "bacon"];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

/// Keyword groups used by the dietary rules.
///
/// Matching is plain substring containment over lower-cased recipe text, so
/// every entry must be lower-case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryKeywords {
    pub version: u32,
    pub meat: Vec<String>,
    pub fish: Vec<String>,
    pub dairy: Vec<String>,
    pub gluten: Vec<String>,
    pub nuts: Vec<String>,
    pub shellfish: Vec<String>,
    pub pork: Vec<String>,
}

impl Default for DietaryKeywords {
    fn default() -> Self {
        Self {
            version: KEYWORDS_VERSION,
            meat: owned(MEAT),
            fish: owned(FISH),
            dairy: owned(DAIRY),
            gluten: owned(GLUTEN),
            nuts: owned(NUTS),
            shellfish: owned(SHELLFISH),
            pork: owned(PORK),
        }
    }
}

impl DietaryKeywords {
    /// Lower-case and trim every entry, dropping blanks.
    pub fn normalized(mut self) -> Self {
        for group in [
            &mut self.meat,
            &mut self.fish,
            &mut self.dairy,
            &mut self.gluten,
            &mut self.nuts,
            &mut self.shellfish,
            &mut self.pork,
        ] {
            *group = group
                .iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lowercase_and_versioned() {
        let keywords = DietaryKeywords::default();

        assert_eq!(keywords.version, KEYWORDS_VERSION);
        assert_eq!(keywords.clone().normalized(), keywords);
        assert_eq!(keywords.meat.len(), 12);
        assert_eq!(keywords.fish.len(), 12);
        assert_eq!(keywords.dairy.len(), 11);
        assert_eq!(keywords.gluten.len(), 8);
        assert_eq!(keywords.nuts.len(), 12);
        assert_eq!(keywords.shellfish.len(), 7);
        assert_eq!(keywords.pork, vec!["pork", "ham", "bacon"]);
    }

    #[test]
    fn partial_override_keeps_other_groups() {
        let keywords: DietaryKeywords =
            serde_json::from_str(r#"{"version": 2, "nuts": [" Macadamia "]}"#).unwrap();
        let keywords = keywords.normalized();

        assert_eq!(keywords.version, 2);
        assert_eq!(keywords.nuts, vec!["macadamia"]);
        assert_eq!(keywords.meat, DietaryKeywords::default().meat);
    }
}

use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

const BREAKFAST: &[&str] = &[
    "pancake",
    "waffle",
    "egg",
    "omelette",
    "toast",
    "smoothie",
    "cereal",
    "oatmeal",
    "muffin",
    "breakfast",
    "brunch",
    "scramble",
    "bacon",
];

const LUNCH: &[&str] = &[
    "salad", "sandwich", "wrap", "soup", "lunch", "bowl", "light", "quick", "burger",
];

const SNACK: &[&str] = &[
    "snack",
    "bite",
    "small",
    "appetizer",
    "dip",
    "chips",
    "fruit",
    "nuts",
    "energy",
];

const DINNER: &[&str] = &[
    "steak",
    "pasta",
    "chicken",
    "fish",
    "roast",
    "dinner",
    "casserole",
    "curry",
    "stir-fry",
    "grilled",
    "baked",
];

const LATE_NIGHT: &[&str] = &["light", "simple", "quick", "easy", "snack", "small"];

/// Meal slot derived from the hour of the day.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, VariantArray,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    LateNight,
}

impl MealTime {
    /// Total over every input; hours past 23 fall into late night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=9 => Self::Breakfast,
            10..=13 => Self::Lunch,
            14..=16 => Self::Snack,
            17..=20 => Self::Dinner,
            _ => Self::LateNight,
        }
    }

    /// Meal time for the local clock, or UTC when the offset is unknown.
    pub fn now() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::from_hour(u32::from(now.hour()))
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => BREAKFAST,
            Self::Lunch => LUNCH,
            Self::Snack => SNACK,
            Self::Dinner => DINNER,
            Self::LateNight => LATE_NIGHT,
        }
    }

    /// Heading and subtitle shown above the recommendations.
    pub fn greeting(self) -> (&'static str, &'static str) {
        match self {
            Self::Breakfast => ("Good Morning!", "Time for a healthy breakfast"),
            Self::Lunch => ("Lunch Time!", "Fuel up for the afternoon"),
            Self::Snack => ("Afternoon Snack?", "Something small to keep you going"),
            Self::Dinner => ("Dinner Time!", "Wind down with a hearty meal"),
            Self::LateNight => ("Late Night Bite", "Looking for a light snack?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_boundaries() {
        let expected = [
            (0, MealTime::LateNight),
            (4, MealTime::LateNight),
            (5, MealTime::Breakfast),
            (9, MealTime::Breakfast),
            (10, MealTime::Lunch),
            (13, MealTime::Lunch),
            (14, MealTime::Snack),
            (16, MealTime::Snack),
            (17, MealTime::Dinner),
            (20, MealTime::Dinner),
            (21, MealTime::LateNight),
            (23, MealTime::LateNight),
            (24, MealTime::LateNight),
            (u32::MAX, MealTime::LateNight),
        ];

        for (hour, meal_time) in expected {
            assert_eq!(MealTime::from_hour(hour), meal_time, "hour {hour}");
        }
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(MealTime::LateNight.to_string(), "late-night");
        assert_eq!("Late-Night".parse::<MealTime>().ok(), Some(MealTime::LateNight));
        assert_eq!("dinner".parse::<MealTime>().ok(), Some(MealTime::Dinner));
    }

    #[test]
    fn every_meal_time_has_keywords() {
        for meal_time in MealTime::VARIANTS {
            assert!(!meal_time.keywords().is_empty());
        }
    }
}

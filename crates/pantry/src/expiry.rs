use std::collections::HashMap;

use chefbuddy_shared::food::{FoodCategory, FoodItem};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Duration};

use crate::ShelfLifeTable;

// Wider than the whole representable date range; keeps `Duration::days` in bounds.
const MAX_OFFSET_DAYS: i64 = 10_000_000;

/// Derived expiry of one item relative to a given "today".
///
/// Never stored: recompute on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryPrediction {
    #[serde(with = "chefbuddy_shared::iso_date")]
    pub safe_expiry: Date,
    pub days_left: i64,
    pub shelf_life_days: i64,
}

impl ExpiryPrediction {
    pub fn tier(&self) -> UrgencyTier {
        UrgencyTier::from_days_left(self.days_left)
    }

    pub fn is_expired(&self) -> bool {
        self.days_left < 0
    }
}

/// Urgency buckets. Declaration order is most urgent first.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// One day or less, including already expired.
    Critical,
    /// Two to three days.
    Urgent,
    /// Four to seven days.
    Warning,
    /// More than a week.
    Fresh,
}

impl UrgencyTier {
    pub fn from_days_left(days_left: i64) -> Self {
        match days_left {
            i64::MIN..=1 => UrgencyTier::Critical,
            2..=3 => UrgencyTier::Urgent,
            4..=7 => UrgencyTier::Warning,
            _ => UrgencyTier::Fresh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "Use Today!",
            UrgencyTier::Urgent => "Use Soon",
            UrgencyTier::Warning => "This Week",
            UrgencyTier::Fresh => "Fresh",
        }
    }
}

/// An item paired with its prediction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifiedItem<'a> {
    pub item: &'a FoodItem,
    pub prediction: ExpiryPrediction,
}

impl ClassifiedItem<'_> {
    pub fn tier(&self) -> UrgencyTier {
        self.prediction.tier()
    }

    pub fn advice_context(&self) -> AdviceContext {
        AdviceContext {
            name: self.item.name.to_owned(),
            category: self.item.category.to_owned(),
            days_left: self.prediction.days_left,
        }
    }
}

/// What the advice generator is told about an item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdviceContext {
    pub name: String,
    pub category: FoodCategory,
    pub days_left: i64,
}

/// Items partitioned by tier, each group most urgent first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrgencyGroups<'a> {
    pub critical: Vec<ClassifiedItem<'a>>,
    pub urgent: Vec<ClassifiedItem<'a>>,
    pub warning: Vec<ClassifiedItem<'a>>,
    pub fresh: Vec<ClassifiedItem<'a>>,
}

impl<'a> UrgencyGroups<'a> {
    pub fn get(&self, tier: UrgencyTier) -> &[ClassifiedItem<'a>] {
        match tier {
            UrgencyTier::Critical => &self.critical,
            UrgencyTier::Urgent => &self.urgent,
            UrgencyTier::Warning => &self.warning,
            UrgencyTier::Fresh => &self.fresh,
        }
    }

    fn get_mut(&mut self, tier: UrgencyTier) -> &mut Vec<ClassifiedItem<'a>> {
        match tier {
            UrgencyTier::Critical => &mut self.critical,
            UrgencyTier::Urgent => &mut self.urgent,
            UrgencyTier::Warning => &mut self.warning,
            UrgencyTier::Fresh => &mut self.fresh,
        }
    }

    /// Groups in tier order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (UrgencyTier, &[ClassifiedItem<'a>])> {
        UrgencyTier::VARIANTS
            .iter()
            .map(move |tier| (*tier, self.get(*tier)))
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.urgent.len() + self.warning.len() + self.fresh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps pantry items to expiry predictions and urgency tiers.
///
/// Pure: every method is a function of the items, the shelf-life table and
/// the `today` passed in.
#[derive(Clone, Debug, Default)]
pub struct ExpiryClassifier {
    table: ShelfLifeTable,
}

impl ExpiryClassifier {
    pub fn new(table: ShelfLifeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ShelfLifeTable {
        &self.table
    }

    pub fn classify(&self, item: &FoodItem, today: Date) -> ExpiryPrediction {
        let shelf_life_days = self.table.shelf_life_days(&item.category);
        let offset = shelf_life_days.clamp(-MAX_OFFSET_DAYS, MAX_OFFSET_DAYS);
        let safe_expiry = item
            .purchase_date
            .checked_add(Duration::days(offset))
            .unwrap_or(if offset < 0 { Date::MIN } else { Date::MAX });

        ExpiryPrediction {
            safe_expiry,
            days_left: (safe_expiry - today).whole_days(),
            shelf_life_days,
        }
    }

    pub fn classify_item<'a>(&self, item: &'a FoodItem, today: Date) -> ClassifiedItem<'a> {
        ClassifiedItem {
            item,
            prediction: self.classify(item, today),
        }
    }

    /// Predictions keyed by item id.
    pub fn classify_all(&self, items: &[FoodItem], today: Date) -> HashMap<String, ExpiryPrediction> {
        items
            .iter()
            .map(|item| (item.id.to_owned(), self.classify(item, today)))
            .collect()
    }

    /// Most urgent first. The sort is stable: items with equal days left keep
    /// their input order.
    pub fn rank_by_urgency<'a>(&self, items: &'a [FoodItem], today: Date) -> Vec<ClassifiedItem<'a>> {
        let mut ranked: Vec<_> = items
            .iter()
            .map(|item| self.classify_item(item, today))
            .collect();
        ranked.sort_by_key(|classified| classified.prediction.days_left);

        ranked
    }

    /// Every item lands in exactly one group.
    pub fn group_by_urgency<'a>(&self, items: &'a [FoodItem], today: Date) -> UrgencyGroups<'a> {
        let mut groups = UrgencyGroups::default();

        for classified in self.rank_by_urgency(items, today) {
            groups.get_mut(classified.tier()).push(classified);
        }

        groups
    }

    /// Items with `days` or fewer days left, most urgent first.
    pub fn expiring_within<'a>(
        &self,
        items: &'a [FoodItem],
        today: Date,
        days: i64,
    ) -> Vec<ClassifiedItem<'a>> {
        self.rank_by_urgency(items, today)
            .into_iter()
            .filter(|classified| classified.prediction.days_left <= days)
            .collect()
    }
}

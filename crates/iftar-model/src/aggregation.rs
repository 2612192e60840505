use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::key::ItemSpiceKey;

/// Which rows an aggregation covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum Scope {
    /// Every non-refunded row.
    Combined,
    /// Rows whose gender tag contains the label.
    Gender(String),
}

impl Scope {
    pub fn gender(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ModelError::EmptyGenderLabel);
        }
        Ok(Self::Gender(label))
    }

    pub fn gender_filter(&self) -> Option<&str> {
        match self {
            Self::Combined => None,
            Self::Gender(label) => Some(label.as_str()),
        }
    }

    /// Only the combined scope keeps per-item meal/non-meal breakdowns.
    pub fn tracks_breakdown(&self) -> bool {
        matches!(self, Self::Combined)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined => f.write_str("combined"),
            Self::Gender(label) => write!(f, "gender:{label}"),
        }
    }
}

/// Meal and non-meal counts per canonical item name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealBreakdown {
    pub meal_by_item: BTreeMap<String, usize>,
    pub non_meal_by_item: BTreeMap<String, usize>,
}

impl MealBreakdown {
    pub fn meal_total(&self) -> usize {
        self.meal_by_item.values().sum()
    }

    pub fn non_meal_total(&self) -> usize {
        self.non_meal_by_item.values().sum()
    }
}

/// Rows left out of an aggregation, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    pub refunded: usize,
    pub gender_mismatch: usize,
    pub unparsable: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.refunded + self.gender_mismatch + self.unparsable
    }
}

/// Counts accumulated over one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    pub scope: Scope,
    /// Meal and non-meal orders merged per item and spice.
    pub item_spice_counts: BTreeMap<ItemSpiceKey, usize>,
    pub drink_counts: BTreeMap<String, usize>,
    /// Present for the combined scope only.
    pub breakdown: Option<MealBreakdown>,
    pub total_meals: usize,
    pub total_non_meals: usize,
    pub skipped: SkipCounts,
}

impl AggregationResult {
    pub fn empty(scope: Scope) -> Self {
        let breakdown = scope.tracks_breakdown().then(MealBreakdown::default);
        Self {
            scope,
            item_spice_counts: BTreeMap::new(),
            drink_counts: BTreeMap::new(),
            breakdown,
            total_meals: 0,
            total_non_meals: 0,
            skipped: SkipCounts::default(),
        }
    }

    /// Number of rows that reached the food counts.
    pub fn counted_rows(&self) -> usize {
        self.total_meals + self.total_non_meals
    }

    pub fn food_total(&self) -> usize {
        self.item_spice_counts.values().sum()
    }

    pub fn drink_total(&self) -> usize {
        self.drink_counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_spice_counts.is_empty() && self.drink_counts.is_empty()
    }
}

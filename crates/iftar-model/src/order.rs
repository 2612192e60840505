use serde::{Deserialize, Serialize};

/// Status value that removes a row from every report.
pub const REFUNDED_STATUS: &str = "refunded";

/// Drink choice recorded for orders that could not include a drink.
pub const NO_DRINK_SENTINEL: &str = "none (can only buy drink with meal)";

/// One registration row as read from the order export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Raw `item/spice/drink` string, e.g. `"MEAL: Burger/Hot/Cola"`.
    pub line_item_raw: String,
    /// Order status; `refunded` (any case) excludes the row.
    pub status: String,
    /// Free-text gender tag, matched by substring.
    pub gender_tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dietary: String,
}

impl OrderRow {
    pub fn new(
        line_item_raw: impl Into<String>,
        status: impl Into<String>,
        gender_tag: impl Into<String>,
    ) -> Self {
        Self {
            line_item_raw: line_item_raw.into(),
            status: status.into(),
            gender_tag: gender_tag.into(),
            name: String::new(),
            dietary: String::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = dietary.into();
        self
    }

    pub fn is_refunded(&self) -> bool {
        self.status.to_lowercase() == REFUNDED_STATUS
    }
}

/// A parsed line item.
///
/// `item_name` is canonical: the `MEAL:` marker has been stripped and
/// recorded in `is_meal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_name: String,
    pub spice_level: String,
    pub drink: String,
    pub is_meal: bool,
}

impl LineItem {
    /// Returns the drink when it should be counted.
    pub fn countable_drink(&self) -> Option<&str> {
        if self.drink.is_empty() || self.drink.to_lowercase() == NO_DRINK_SENTINEL {
            None
        } else {
            Some(self.drink.as_str())
        }
    }
}

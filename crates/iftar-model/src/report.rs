use serde::{Deserialize, Serialize};

/// Display lines for one aggregation, each list in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub food: Vec<String>,
    pub drinks: Vec<String>,
    pub meal_breakdown: Vec<String>,
    pub non_meal_breakdown: Vec<String>,
}

/// Footer totals fed into a message. `None` renders as an empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub meals: Option<usize>,
    pub non_meals: Option<usize>,
}

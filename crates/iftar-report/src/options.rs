//! Report configuration.

use serde::{Deserialize, Serialize};

/// Titles used for one gender's sheets and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenderConfig {
    /// Substring matched against the gender tag, e.g. `"Sister"`.
    pub label: String,
    pub orders_title: String,
    pub summary_title: String,
    pub message_title: String,
}

impl GenderConfig {
    /// Derives the usual titles from a label: `"Sister"` gives
    /// `"Sisters' Orders"`, `"Sisters' Summary"` and `"SISTERS ORDERS"`.
    pub fn from_label(label: &str) -> Self {
        let plural = format!("{label}s");
        Self {
            label: label.to_string(),
            orders_title: format!("{plural}' Orders"),
            summary_title: format!("{plural}' Summary"),
            message_title: format!("{} ORDERS", plural.to_uppercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    pub genders: Vec<GenderConfig>,
    pub combined_title: String,
    pub combined_message_title: String,
    /// Gender whose summary feeds the second announcement message.
    pub message_gender: String,
    /// Orders taken outside the form, added to `Total Orders:`.
    pub extra_orders: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            genders: vec![
                GenderConfig::from_label("Brother"),
                GenderConfig::from_label("Sister"),
            ],
            combined_title: "Orders Summary".to_string(),
            combined_message_title: "ORDERS SUMMARY".to_string(),
            message_gender: "Sister".to_string(),
            extra_orders: None,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_extra_orders(mut self, extra_orders: Option<usize>) -> Self {
        self.extra_orders = extra_orders;
        self
    }

    pub fn gender(&self, label: &str) -> Option<&GenderConfig> {
        self.genders.iter().find(|gender| gender.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_titles_match_the_event_sheets() {
        let options = ReportOptions::default();
        let brother = options.gender("Brother").expect("brother config");
        assert_eq!(brother.orders_title, "Brothers' Orders");
        assert_eq!(brother.summary_title, "Brothers' Summary");
        assert_eq!(brother.message_title, "BROTHERS ORDERS");
        let sister = options.gender(&options.message_gender).expect("sister config");
        assert_eq!(sister.message_title, "SISTERS ORDERS");
    }
}

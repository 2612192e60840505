//! Counting invariants over generated order rows.

use iftar_model::{OrderRow, Scope};
use iftar_report::{aggregate_scope, render};
use proptest::prelude::*;

fn line_item() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::sample::select(vec!["Burger", "Wrap", "Chicken Biryani", "Falafel"]),
        prop::sample::select(vec!["Mild", "Medium", "Hot", ""]),
        prop::sample::select(vec![
            "Cola",
            "Water",
            "",
            "None (can only buy drink with meal)",
        ]),
    )
        .prop_map(|(meal, item, spice, drink)| {
            let prefix = if meal { "MEAL: " } else { "" };
            format!("{prefix}{item}/{spice}/{drink}")
        })
}

fn order_row() -> impl Strategy<Value = OrderRow> {
    (
        prop_oneof![line_item(), Just("garbage".to_string()), Just(String::new())],
        prop::sample::select(vec!["Processing", "Completed", "refunded", "Refunded"]),
        prop::sample::select(vec!["Brother", "Sister", "Brother, Sister", ""]),
    )
        .prop_map(|(line, status, gender)| OrderRow::new(line, status, gender))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn food_counts_cover_every_counted_row(rows in prop::collection::vec(order_row(), 0..40)) {
        for scope in [Scope::Combined, Scope::Gender("Brother".into()), Scope::Gender("Sister".into())] {
            let result = aggregate_scope(&rows, scope);
            prop_assert_eq!(result.food_total(), result.total_meals + result.total_non_meals);
            prop_assert_eq!(result.food_total(), result.counted_rows());
            prop_assert!(result.drink_total() <= result.counted_rows());
            prop_assert_eq!(
                result.counted_rows() + result.skipped.total(),
                rows.len()
            );
        }
    }

    #[test]
    fn breakdown_sums_match_totals(rows in prop::collection::vec(order_row(), 0..40)) {
        let result = aggregate_scope(&rows, Scope::Combined);
        let breakdown = result.breakdown.as_ref().expect("combined breakdown");
        prop_assert_eq!(breakdown.meal_total(), result.total_meals);
        prop_assert_eq!(breakdown.non_meal_total(), result.total_non_meals);
    }

    #[test]
    fn rendered_lists_are_sorted(rows in prop::collection::vec(order_row(), 0..40)) {
        let result = aggregate_scope(&rows, Scope::Combined);
        let report = render(&result);
        let mut drinks = report.drinks.clone();
        drinks.sort();
        prop_assert_eq!(&drinks, &report.drinks);
        prop_assert!(report.drinks.iter().all(|line| !line.to_lowercase().starts_with("none (")));

        // Food lines follow the composite `item||spice` text.
        let composites: Vec<String> = result.item_spice_counts.keys().map(ToString::to_string).collect();
        let mut sorted = composites.clone();
        sorted.sort();
        prop_assert_eq!(&sorted, &composites);
        prop_assert_eq!(report.food.len(), composites.len());
    }
}

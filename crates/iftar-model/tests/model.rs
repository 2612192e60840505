//! Tests for iftar-model types.

use iftar_model::{
    LineItem, ModelError, OrderRow, ReportTotals, Scope, StyledText, TextRun, TextSpan,
};

#[test]
fn refunded_status_is_case_insensitive() {
    assert!(OrderRow::new("Burger/Hot/Cola", "Refunded", "Brother").is_refunded());
    assert!(OrderRow::new("Burger/Hot/Cola", "REFUNDED", "Brother").is_refunded());
    assert!(!OrderRow::new("Burger/Hot/Cola", "completed", "Brother").is_refunded());
    assert!(!OrderRow::new("Burger/Hot/Cola", "", "Brother").is_refunded());
}

#[test]
fn sentinel_drink_is_not_countable() {
    let item = LineItem {
        item_name: "Burger".to_string(),
        spice_level: "Hot".to_string(),
        drink: "None (can only buy drink with meal)".to_string(),
        is_meal: false,
    };
    assert_eq!(item.countable_drink(), None);

    let empty = LineItem {
        drink: String::new(),
        ..item.clone()
    };
    assert_eq!(empty.countable_drink(), None);

    let cola = LineItem {
        drink: "Cola".to_string(),
        ..item
    };
    assert_eq!(cola.countable_drink(), Some("Cola"));
}

#[test]
fn gender_scope_rejects_blank_label() {
    assert_eq!(Scope::gender("  "), Err(ModelError::EmptyGenderLabel));
    assert_eq!(Scope::gender("Brother").unwrap().to_string(), "gender:Brother");
    assert_eq!(Scope::Combined.to_string(), "combined");
}

#[test]
fn styled_text_validates_spans() {
    let ok = StyledText::new("Food Orders\nBurger", vec![TextSpan::new(0, 11)]).expect("valid");
    assert_eq!(ok.bold_text(), vec!["Food Orders"]);

    let err = StyledText::new("short", vec![TextSpan::new(2, 40)]).unwrap_err();
    assert_eq!(
        err,
        ModelError::InvalidSpan {
            start: 2,
            end: 40,
            len: 5
        }
    );
}

#[test]
fn styled_text_splits_into_runs() {
    let text = StyledText::new("TITLE\n\nFood Orders\nBurger", vec![
        TextSpan::new(0, 5),
        TextSpan::new(7, 18),
    ])
    .unwrap();
    assert_eq!(text.runs(), vec![
        TextRun {
            text: "TITLE",
            bold: true
        },
        TextRun {
            text: "\n\n",
            bold: false
        },
        TextRun {
            text: "Food Orders",
            bold: true
        },
        TextRun {
            text: "\nBurger",
            bold: false
        },
    ]);
}

#[test]
fn span_char_range_counts_characters() {
    let text = "Café\nFood Orders";
    let start = text.find("Food").unwrap();
    let span = TextSpan::new(start, start + "Food Orders".len());
    assert_eq!(span.char_range(text), Some((5, 16)));
    // Splitting the two-byte 'é' is rejected.
    assert_eq!(TextSpan::new(0, 4).char_range(text), None);
}

#[test]
fn styled_text_serializes() {
    let text = StyledText::new("ORDERS", vec![TextSpan::new(0, 6)]).unwrap();
    let json = serde_json::to_string(&text).expect("serialize styled text");
    assert_eq!(
        json,
        r#"{"plain_text":"ORDERS","bold_spans":[{"start":0,"end":6}]}"#
    );
    let round: StyledText = serde_json::from_str(&json).expect("deserialize styled text");
    assert_eq!(round, text);
}

#[test]
fn report_totals_default_to_unknown() {
    let totals = ReportTotals::default();
    assert_eq!(totals.meals, None);
    assert_eq!(totals.non_meals, None);
}

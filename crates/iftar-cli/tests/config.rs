use iftar_cli::config::CliConfig;
use iftar_ingest::ColumnRef;

#[test]
fn empty_object_gives_defaults() {
    let config = CliConfig::from_json("{}").expect("parse");
    assert_eq!(config, CliConfig::default());
    assert_eq!(config.columns.line_item, ColumnRef::letter("U"));
    assert_eq!(config.report.message_gender, "Sister");
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let config = CliConfig::from_json(
        r#"{
            "columns": { "gender": { "header": "Brother or Sister?" } },
            "report": { "extra_orders": 4 }
        }"#,
    )
    .expect("parse");
    assert_eq!(config.columns.gender, ColumnRef::header("Brother or Sister?"));
    assert_eq!(config.columns.status, ColumnRef::letter("C"));
    assert_eq!(config.report.extra_orders, Some(4));
    assert_eq!(config.report.genders.len(), 2);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(CliConfig::from_json(r#"{ "colums": {} }"#).is_err());
    assert!(CliConfig::from_json(r#"{ "report": { "extra": 1 } }"#).is_err());
}

#[test]
fn flag_beats_file_value() {
    let config = CliConfig::from_json(r#"{ "report": { "extra_orders": 4 } }"#).expect("parse");
    assert_eq!(config.clone().with_extra_orders(Some(9)).report.extra_orders, Some(9));
    assert_eq!(config.with_extra_orders(None).report.extra_orders, Some(4));
}

#[test]
fn missing_config_file_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");
    let error = CliConfig::load(Some(&path)).expect_err("missing file");
    assert!(format!("{error:#}").contains("missing.json"));
}

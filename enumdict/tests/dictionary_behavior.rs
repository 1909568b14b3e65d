//! End-to-end behavior of enum dictionaries through the public facade.

use enumdict::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_test_writer()
        .try_init();
}

fn status_dict() -> Dict {
    Dict::new(
        "status",
        vec![
            DictEntry::new(0, "Inactive").with_attr_type(AttrType::Danger),
            DictEntry::new(1, "Active").with_attr_type(AttrType::Success),
        ],
    )
}

#[test]
fn test_status_scenario() {
    init_logging();
    let dict = status_dict();

    assert_eq!(dict.label(1), "Active");
    assert_eq!(dict.get_attr_type(0, "info"), "danger");
    assert_eq!(dict.get_label(2, "N/A"), "N/A");
    assert_eq!(dict.get_type(), "status");
}

#[test]
fn test_every_entry_is_reachable() {
    let dict = status_dict();
    for entry in dict.get_entries() {
        let found = dict.get_entry(entry.value()).expect("entry indexed");
        assert_eq!(found.label(), entry.label());
        assert_eq!(found.attr_type(), entry.attr_type());
    }
}

#[test]
fn test_default_returned_only_for_unknown_values() {
    let dict = status_dict();
    for v in -2i64..5 {
        let known = v == 0 || v == 1;
        assert_eq!(dict.get_label(v, "<none>") == "<none>", !known, "value {}", v);
    }
}

#[test]
fn test_numeric_string_collision_both_ways() {
    let numeric = Dict::new("t", vec![DictEntry::new(1, "A")]);
    let string = Dict::new("t", vec![DictEntry::new("1", "A")]);

    assert_eq!(numeric.get_entry("1").and_then(DictEntry::label), Some("A"));
    assert_eq!(string.get_entry(1).and_then(DictEntry::label), Some("A"));
}

#[test]
fn test_patch_attr_type_keeps_label() {
    init_logging();
    let mut dict = status_dict();
    let patches = PatchMap::from_json(r#"{"1": {"attrType": "danger"}}"#).unwrap();

    dict.patch_field_value(&patches);

    assert_eq!(dict.get_attr_type(1, "info"), "danger");
    assert_eq!(dict.label(1), "Active");
}

#[test]
fn test_patch_unknown_value_adds_nothing() {
    let mut dict = status_dict();
    dict.patch_field_value(&PatchMap::new().with("404", EntryPatch::new().attr_type("primary")));

    assert_eq!(dict.len(), 2);
    assert!(dict.get_entry(404).is_none());
}

#[test]
fn test_duplicate_values_last_write_wins() {
    init_logging();
    let dict = Dict::new("dup", vec![DictEntry::new(1, "A"), DictEntry::new(1, "B")]);

    assert_eq!(dict.get_entries().len(), 2);
    assert_eq!(dict.get_entry(1).unwrap().label(), Some("B"));
}

#[test]
fn test_unlabeled_definition_uses_default_label() {
    let dict = Dict::from_json_with_config(
        r#"{"type": "level", "items": [{"value": 1}, {"value": 2, "label": "High"}]}"#,
        DictConfig::new().with_default_label("?"),
    )
    .unwrap();

    assert_eq!(dict.get_label(1, "N/A"), "N/A");
    assert_eq!(dict.label(1), "?");
    assert_eq!(dict.label(2), "High");
    assert_eq!(dict.to_string(), "level: [1:?,2:High]");
}

#[test]
fn test_missing_field_fallback() {
    let dict = status_dict();
    let fallback = FieldValue::from("fallback");

    assert_eq!(
        dict.get_field_or(999, "nonexistent", &fallback).as_str(),
        Some("fallback")
    );
}

#[test]
fn test_generated_definitions_through_registry() {
    init_logging();
    let mut registry = DictRegistry::new();
    let config = DictConfig::new().with_type_style(TypeStyle::SnakeCase);

    let order = Dict::from_json_with_config(
        r#"{"type": "OrderStatus", "items": [
            {"value": 0, "label": "Pending", "attrType": "warning"},
            {"value": 1, "label": "Paid", "attrType": "success", "refundable": true}
        ]}"#,
        config.clone(),
    )
    .unwrap();
    let gender = Dict::from_json_with_config(
        r#"{"type": "Gender", "items": [{"value": "f", "label": "Female"}, {"value": "m", "label": "Male"}]}"#,
        config,
    )
    .unwrap();

    registry.register(order).unwrap();
    registry.register(gender).unwrap();

    assert_eq!(registry.types().collect::<Vec<_>>(), vec!["gender", "order_status"]);
    assert_eq!(registry.label("order_status", "1"), "Paid");
    assert_eq!(registry.label("gender", "m"), "Male");
    assert_eq!(
        registry
            .get("order_status")
            .and_then(|d| d.get_field(1, "refundable"))
            .and_then(FieldValue::as_bool),
        Some(true)
    );
    assert_eq!(
        registry.get("order_status").unwrap().to_string(),
        "order_status: [0:Pending,1:Paid]"
    );
}

#[test]
fn test_shared_dict_round_trip_through_json() {
    let shared = SharedDict::new(status_dict());
    shared.patch_field_value(
        &PatchMap::from_json(r#"{"0": {"label": "Nope", "hint": "disabled"}}"#).unwrap(),
    );

    let json = shared.read().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "status");
    assert_eq!(value["items"][0]["label"], "Inactive");
    assert_eq!(value["items"][0]["hint"], "disabled");
    assert_eq!(value["items"][1]["attrType"], "success");
}

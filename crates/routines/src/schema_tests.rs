//! Unit tests for routine payload validation.

use serde_json::{json, Value};

use crate::{validate_routine, Routine};

fn valid_payload() -> Value {
    json!({
        "name": "water",
        "time": 480,
        "action": "water_plants",
        "repeat": "daily",
    })
}

fn without(field: &str) -> Value {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove(field);
    payload
}

fn with(field: &str, value: Value) -> Value {
    let mut payload = valid_payload();
    payload[field] = value;
    payload
}

// ============================================================
// Accepted payloads
// ============================================================

#[test]
fn valid_payload_produces_normalized_routine() {
    let routine = validate_routine(&valid_payload()).expect("payload should be valid");
    assert_eq!(routine, Routine::new("water", 480, "water_plants", "daily"));
}

#[test]
fn boundary_lengths_are_accepted() {
    let payload = json!({
        "name": "n",
        "time": 0,
        "action": "a".repeat(16),
        "repeat": "r".repeat(16),
    });
    let routine = validate_routine(&payload).expect("1 and 16 chars are in range");
    assert_eq!(routine.action.len(), 16);
}

#[test]
fn length_counts_characters_not_bytes() {
    // 16 characters, 32 bytes.
    let payload = with("name", json!("é".repeat(16)));
    assert!(validate_routine(&payload).is_ok());
}

#[test]
fn time_is_opaque_integer() {
    for time in [i64::MIN, -1, 0, 86_400, i64::MAX] {
        let routine = validate_routine(&with("time", json!(time))).unwrap();
        assert_eq!(routine.time, time);
    }
}

#[test]
fn whole_valued_time_is_normalized() {
    let cases = [
        (json!("480"), 480),
        (json!(" 480 "), 480),
        (json!(480.0), 480),
        (json!("-15"), -15),
    ];
    for (time, expected) in cases {
        let routine = validate_routine(&with("time", time.clone())).unwrap();
        assert_eq!(routine.time, expected, "time = {time}");
    }

    let record = serde_json::to_value(validate_routine(&with("time", json!("480"))).unwrap()).unwrap();
    assert_eq!(record["time"], json!(480));
}

#[test]
fn extra_fields_are_dropped() {
    let payload = with("owner", json!("someone"));
    let routine = validate_routine(&payload).unwrap();
    let record = serde_json::to_value(&routine).unwrap();
    assert_eq!(record, valid_payload());
}

// ============================================================
// Rejected payloads
// ============================================================

#[test]
fn each_missing_field_is_reported_by_name() {
    for field in ["name", "time", "action", "repeat"] {
        let err = validate_routine(&without(field)).unwrap_err();
        assert_eq!(err.errors().len(), 1, "field {field}");
        assert_eq!(err.errors()[0].field(), field);
        assert_eq!(err.errors()[0].kind, "value_error.missing");
    }
}

#[test]
fn empty_text_fields_are_length_violations() {
    for field in ["name", "action", "repeat"] {
        let err = validate_routine(&with(field, json!(""))).unwrap_err();
        assert_eq!(err.errors().len(), 1, "field {field}");
        assert!(err.has_field(field));
        let e = &err.errors()[0];
        assert_eq!(e.kind, "value_error.any_str.min_length");
        assert_eq!(e.ctx, Some(json!({ "limit_value": 1 })));
    }
}

#[test]
fn overlong_text_fields_are_rejected() {
    for field in ["name", "action", "repeat"] {
        let err = validate_routine(&with(field, json!("x".repeat(17)))).unwrap_err();
        assert!(err.has_field(field));
        assert_eq!(err.errors()[0].kind, "value_error.any_str.max_length");
        assert_eq!(err.errors()[0].ctx, Some(json!({ "limit_value": 16 })));
    }
}

#[test]
fn wrong_types_are_rejected() {
    let err = validate_routine(&with("name", json!(42))).unwrap_err();
    assert_eq!(err.errors()[0].kind, "type_error.str");

    for bad_time in [
        json!("480.5"),
        json!("eight"),
        json!(""),
        json!(480.5),
        json!(true),
        json!(u64::MAX),
        json!(1e20),
        json!([480]),
    ] {
        let err = validate_routine(&with("time", bad_time.clone())).unwrap_err();
        assert_eq!(err.errors()[0].kind, "type_error.integer", "time = {bad_time}");
    }
}

#[test]
fn null_is_not_accepted_for_required_fields() {
    let err = validate_routine(&with("repeat", Value::Null)).unwrap_err();
    assert_eq!(err.errors()[0].field(), "repeat");
    assert_eq!(err.errors()[0].kind, "type_error.none.not_allowed");
}

#[test]
fn all_violations_are_collected_in_field_order() {
    let payload = json!({ "name": "", "action": "x".repeat(20) });
    let err = validate_routine(&payload).unwrap_err();
    let fields: Vec<&str> = err.errors().iter().map(|e| e.field()).collect();
    assert_eq!(fields, vec!["name", "time", "action", "repeat"]);
}

#[test]
fn non_object_payload_is_rejected_at_root() {
    for payload in [json!([]), json!("routine"), json!(null), json!(7)] {
        let err = validate_routine(&payload).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].field(), "__root__");
        assert_eq!(err.errors()[0].kind, "type_error.dict");
    }
}

#[test]
fn field_errors_serialize_with_type_key() {
    let err = validate_routine(&without("time")).unwrap_err();
    let body = serde_json::to_value(err.errors()).unwrap();
    assert_eq!(
        body,
        json!([{ "loc": ["time"], "msg": "field required", "type": "value_error.missing" }])
    );
}

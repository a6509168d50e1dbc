use kindstore_model::{EntitySchema, FieldSpec, FieldType, SchemaField};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── FieldSpec constructors ───────────────────────────────────────

#[test]
fn shorthand_constructors_are_required() {
    for (spec, ty) in [
        (FieldSpec::text("a"), FieldType::Text),
        (FieldSpec::number("a"), FieldType::Number),
        (FieldSpec::bool("a"), FieldType::Bool),
        (FieldSpec::list("a"), FieldType::List),
        (FieldSpec::json("a"), FieldType::Json),
    ] {
        assert_eq!(spec.field_type, ty);
        assert!(!spec.optional);
    }
}

#[test]
fn of_derives_type_from_rust_type() {
    assert_eq!(FieldSpec::of::<String>("s").field_type, FieldType::Text);
    assert_eq!(FieldSpec::of::<u64>("n").field_type, FieldType::Number);
    assert_eq!(FieldSpec::of::<bool>("b").field_type, FieldType::Bool);
    assert_eq!(FieldSpec::of::<Vec<u8>>("l").field_type, FieldType::List);
    assert_eq!(
        FieldSpec::of::<serde_json::Value>("j").field_type,
        FieldType::Json
    );
}

#[test]
fn option_is_optional_with_inner_type() {
    let spec = FieldSpec::of::<Option<i32>>("n");
    assert_eq!(spec, FieldSpec::number("n").optional());
    assert!(<Option<String> as SchemaField>::OPTIONAL);
}

// ── EntitySchema ─────────────────────────────────────────────────

fn song_schema() -> EntitySchema {
    EntitySchema::new(
        "song",
        vec![
            FieldSpec::text("musician"),
            FieldSpec::number("year"),
            FieldSpec::text("album").optional(),
        ],
    )
}

#[test]
fn field_lookup() {
    let schema = song_schema();
    assert_eq!(schema.field("year"), Some(&FieldSpec::number("year")));
    assert_eq!(schema.field("director"), None);
}

#[test]
fn required_fields_skip_optional() {
    let schema = song_schema();
    let required: Vec<&str> = schema.required_fields().collect();
    assert_eq!(required, vec!["musician", "year"]);
}

#[test]
fn schema_json_shape() {
    let value = serde_json::to_value(song_schema()).unwrap();
    assert_eq!(value["kind"], "song");
    assert_eq!(
        value["fields"][1],
        json!({"name": "year", "field_type": "number", "optional": false})
    );
}

#[test]
fn optional_defaults_to_false_when_absent() {
    let spec: FieldSpec =
        serde_json::from_value(json!({"name": "title", "field_type": "text"})).unwrap();
    assert_eq!(spec, FieldSpec::text("title"));
}

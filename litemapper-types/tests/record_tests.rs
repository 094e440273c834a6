use litemapper_types::{Error, Record, TypeKey, ValueKind};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Note {
    title: String,
    tags: Vec<String>,
    pinned: bool,
}

fn sample_note() -> Note {
    Note {
        title: "Groceries".into(),
        tags: vec!["home".into(), "weekly".into()],
        pinned: true,
    }
}

#[test]
fn from_instance_captures_type_and_fields() {
    let record = Record::from_instance(&sample_note()).unwrap();
    assert_eq!(record.type_key(), TypeKey::of::<Note>());
    assert_eq!(record.get_str("title"), Some("Groceries"));
    assert_eq!(record.get("tags"), Some(&json!(["home", "weekly"])));
    assert_eq!(record.get("pinned"), Some(&json!(true)));
}

#[test]
fn into_instance_rebuilds_value() {
    let note = sample_note();
    let record = Record::from_instance(&note).unwrap();
    let back: Note = record.into_instance().unwrap();
    assert_eq!(back, note);
}

#[test]
fn set_replaces_property() {
    let mut record = Record::from_instance(&sample_note()).unwrap();
    let previous = record.set("title", json!("Errands"));
    assert_eq!(previous, Some(json!("Groceries")));
    assert_eq!(record.get_str("title"), Some("Errands"));
}

#[test]
fn properties_lists_field_names() {
    let record = Record::from_instance(&sample_note()).unwrap();
    let mut names: Vec<_> = record.properties().collect();
    names.sort();
    assert_eq!(names, vec!["pinned", "tags", "title"]);
}

#[test]
fn get_str_on_non_string_is_none() {
    let record = Record::from_instance(&sample_note()).unwrap();
    assert_eq!(record.get_str("pinned"), None);
    assert_eq!(record.get_str("missing"), None);
}

#[test]
fn non_object_value_is_not_structured() {
    match Record::from_instance(&42u32).unwrap_err() {
        Error::NotStructured { found, .. } => assert_eq!(found, ValueKind::Integer),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn into_instance_reports_bad_fields() {
    let mut fields = Map::new();
    fields.insert("title".into(), json!(5));
    let record = Record::new(TypeKey::of::<Note>(), fields);
    let err = record.into_instance::<Note>().unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn into_fields_returns_map() {
    let record = Record::from_instance(&sample_note()).unwrap();
    let fields = record.clone().into_fields();
    assert_eq!(&fields, record.fields());
}

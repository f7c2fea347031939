//! Query behavior over the reference 8-record tree.
//!
//! Records are deserialized from JSON to exercise the same input shape the
//! index is meant for: two reserved fields plus opaque extras.

use serde_json::json;
use treestore::{Id, Record, TreeIndex};

fn sample_records() -> Vec<Record> {
    serde_json::from_value(json!([
        {"id": 1, "parent": "root"},
        {"id": 2, "parent": 1, "type": "test"},
        {"id": 3, "parent": 1, "type": "test"},
        {"id": 4, "parent": 2, "type": "test"},
        {"id": 5, "parent": 2, "type": "test"},
        {"id": 6, "parent": 2, "type": "test"},
        {"id": 7, "parent": 4, "type": null},
        {"id": 8, "parent": 4, "type": null},
    ]))
    .unwrap()
}

fn ids(records: &[&Record]) -> Vec<Id> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_all_returns_records_in_input_order() {
    let records = sample_records();
    let index = TreeIndex::new(records.clone());
    let all: Vec<Record> = index.all().into_iter().cloned().collect();
    assert_eq!(all, records);
}

#[test]
fn test_get_returns_record_with_extras_intact() {
    let index = TreeIndex::new(sample_records());
    let record = index.get(&Id::Int(7)).unwrap();
    assert_eq!(record.parent, Id::Int(4));
    assert_eq!(record.extra.get("type"), Some(&json!(null)));
    assert!(index.get(&Id::Int(99)).is_none());
}

#[test]
fn test_children_in_input_order() {
    let index = TreeIndex::new(sample_records());
    assert_eq!(ids(&index.children(&Id::Int(4))), [Id::Int(7), Id::Int(8)]);
    assert_eq!(
        ids(&index.children(&Id::Int(2))),
        [Id::Int(4), Id::Int(5), Id::Int(6)]
    );
    assert!(index.children(&Id::Int(5)).is_empty());
    assert!(index.children(&Id::Int(99)).is_empty());
}

#[test]
fn test_descendants_breadth_first() {
    let index = TreeIndex::new(sample_records());
    // Level 1 children of 2 first, then their children left to right.
    assert_eq!(
        ids(&index.descendants(&Id::Int(2))),
        [Id::Int(4), Id::Int(5), Id::Int(6), Id::Int(7), Id::Int(8)]
    );
    assert_eq!(
        ids(&index.descendants(&Id::Int(1))),
        [
            Id::Int(2),
            Id::Int(3),
            Id::Int(4),
            Id::Int(5),
            Id::Int(6),
            Id::Int(7),
            Id::Int(8)
        ]
    );
    assert!(index.descendants(&Id::Int(8)).is_empty());
    assert!(index.descendants(&Id::Int(99)).is_empty());
}

#[test]
fn test_ancestors_root_first() {
    let index = TreeIndex::new(sample_records());
    assert_eq!(
        ids(&index.ancestors(&Id::Int(7))),
        [Id::Int(1), Id::Int(2), Id::Int(4)]
    );
    assert_eq!(ids(&index.ancestors(&Id::Int(2))), [Id::Int(1)]);
    assert!(index.ancestors(&Id::Int(1)).is_empty());
    assert!(index.ancestors(&Id::Int(99)).is_empty());
}

#[test]
fn test_root_designation() {
    let index = TreeIndex::new(sample_records());
    assert_eq!(index.root().map(|r| r.id.clone()), Some(Id::Int(1)));
    assert_eq!(index.len(), 8);
}

#[test]
fn test_try_new_accepts_sample() {
    let index = TreeIndex::try_new(sample_records()).unwrap();
    assert_eq!(index.root().map(|r| r.id.clone()), Some(Id::Int(1)));
}

#[test]
fn test_string_identifiers_work_as_keys() {
    let index = TreeIndex::new(
        serde_json::from_value::<Vec<Record>>(json!([
            {"id": "a", "parent": 0},
            {"id": "b", "parent": "a"},
            {"id": "c", "parent": "a"},
        ]))
        .unwrap(),
    );
    assert_eq!(
        ids(&index.children(&Id::from("a"))),
        [Id::from("b"), Id::from("c")]
    );
    assert_eq!(ids(&index.ancestors(&Id::from("c"))), [Id::from("a")]);
}

#[test]
fn test_indexed_records_serialize_back_to_input_json() {
    let index = TreeIndex::new(sample_records());
    let record = index.get(&Id::Int(2)).unwrap();
    assert_eq!(
        serde_json::to_value(record).unwrap(),
        json!({"id": 2, "parent": 1, "type": "test"})
    );
}

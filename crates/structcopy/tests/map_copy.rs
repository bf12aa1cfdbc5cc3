mod common;

use common::*;
use fieldmask::Mask;
use fieldmask::naming::to_snake_case;
use serde_json::{Map, Value, json};
use structcopy::{Copier, CopyError, CopyOptions, copy_to_map};

fn render(mask: &Mask, record: &dyn structcopy::Record) -> Value {
    Value::Object(Copier::default().to_map(mask, record).expect("render"))
}

#[test]
fn full_render() {
    assert_eq!(
        render(&Mask::all(), &customer()),
        json!({
            "id": 7,
            "name": "Ada",
            "status": "Active",
            "tags": ["vip", "beta"],
            "address": {"street": "1 Main St", "city": "Springfield", "zip": "12345"},
            "contact": {"number": "555-0100", "extension": 12},
            "previous": [
                {"street": "9 Old Rd", "city": "Shelbyville", "zip": "54321"},
                {"street": "", "city": "", "zip": ""},
            ],
        })
    );
}

#[test]
fn selected_nested_field_only() {
    let mask = Mask::from_paths(["address"], str::to_owned).expect("valid paths");
    assert_eq!(
        render(&mask, &customer()),
        json!({"address": {"street": "1 Main St", "city": "Springfield", "zip": "12345"}})
    );
}

#[test]
fn camel_case_request_paths_resolve_to_field_names() {
    let mask = Mask::from_paths(["Name", "Address.Zip"], to_snake_case)
        .expect("valid paths");
    assert_eq!(
        render(&mask, &customer()),
        json!({"name": "Ada", "address": {"zip": "12345"}})
    );
}

#[test]
fn absent_records_render_null() {
    let mask = Mask::parse("address,contact,previous").expect("mask");
    assert_eq!(
        render(&mask, &Customer::default()),
        json!({"address": null, "contact": null, "previous": []})
    );
}

#[test]
fn exclusion_mask_render() {
    let mask: Mask = "!address,contact,previous,tags,status".parse().expect("mask");
    assert_eq!(render(&mask, &customer()), json!({"id": 7, "name": "Ada"}));
}

#[test]
fn existing_keys_survive() {
    let mut map = Map::new();
    map.insert("kind".to_owned(), json!("customer"));
    copy_to_map(&Mask::parse("id").expect("mask"), &customer(), &mut map).expect("render");
    assert_eq!(Value::Object(map), json!({"kind": "customer", "id": 7}));
}

#[test]
fn map_depth_limit() {
    let copier = Copier::new(CopyOptions::new().with_max_depth(3));
    let rendered = copier.to_map(&Mask::all(), &link_chain(3)).expect("fits");
    assert_eq!(
        Value::Object(rendered),
        json!({"value": 1, "next": {"value": 2, "next": {"value": 3, "next": null}}})
    );

    let err = copier.to_map(&Mask::all(), &link_chain(4)).unwrap_err();
    assert_eq!(err.field_path(), "next.next.next");
    assert!(matches!(err.root_cause(), CopyError::DepthExceeded { .. }));
}

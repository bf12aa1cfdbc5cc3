//! Integration tests for building masks from dotted field paths.

use fieldmask::{FieldFilter, FormatError, Mask, NameStyle, ParseOptions, naming};

/// Verifies the paths carried by a partial-update request.
#[test]
fn update_request_paths() {
    let mask = Mask::from_paths(
        ["displayName", "address.city", "address.postCode", "tags"],
        naming::to_snake_case,
    )
    .unwrap();

    assert_eq!(mask.to_string(), "address{city,post_code},display_name,tags");
    assert!(mask.includes("display_name"));
    assert!(!mask.includes("displayName"));
    assert!(mask.contains_path("address.post_code"));
    assert!(!mask.contains_path("address.street"));
}

/// Verifies the identity function keeps names verbatim.
#[test]
fn identity_naming_keeps_names() {
    let mask = Mask::from_paths(["Name", "Address.City"], str::to_owned).unwrap();
    assert!(mask.contains_path("Address.City"));
    assert!(!mask.contains_path("address.city"));
}

/// Verifies a closure can serve as the naming function.
#[test]
fn closure_naming() {
    let mask = Mask::from_paths(["a.b"], |segment: &str| segment.to_uppercase()).unwrap();
    assert_eq!(mask.to_string(), "A{B}");
}

/// Verifies that the Go-style exported naming maps through `PascalCase`.
#[test]
fn pascal_case_options() {
    let options = ParseOptions::new().with_naming(NameStyle::PascalCase);
    let mask = Mask::from_paths_with(["user_id", "profile.first_name"], &options).unwrap();
    assert_eq!(mask.to_string(), "Profile{FirstName},UserId");
}

/// Verifies that one invalid path rejects the whole list.
#[test]
fn invalid_path_rejects_list() {
    let err = Mask::from_paths(["ok", "also.ok", "broken..path"], str::to_owned).unwrap_err();
    assert_eq!(
        err,
        FormatError::EmptySegment {
            path: "broken..path".to_owned()
        }
    );
    assert!(err.to_string().contains("broken..path"));
}

/// Verifies the path list and compact text describe the same masks.
#[test]
fn flattening_round_trips() {
    let mask = Mask::parse("a{b,c{d}},e").unwrap();
    let paths = mask.paths();
    assert_eq!(paths, vec!["a.b", "a.c.d", "e"]);
    assert_eq!(Mask::from_paths(&paths, str::to_owned).unwrap(), mask);
}

//! Integration tests for attribute discovery.
//!
//! These tests exercise discovery over the shipped `Package` type and
//! over ad-hoc field tables with nesting and malformed entries.

use dpkgmap::mapper::{discover, FieldSpec, MapError, QueryRecord};
use dpkgmap::package::Package;

#[derive(Default)]
struct Labeled {
    product: String,
    vendor: String,
    build: Build,
    notes: String,
}

#[derive(Default)]
struct Build {
    id: String,
    host: String,
}

impl QueryRecord for Labeled {
    fn field_specs() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::text("product", "binary:Package", |r, v| r.product = v),
            FieldSpec::skip("vendor"),
            FieldSpec::record(
                "build",
                vec![
                    FieldSpec::text("id", "Version", |r, v| r.build.id = v),
                    FieldSpec::text("host", "Architecture", |r, v| r.build.host = v),
                ],
            ),
            FieldSpec::text("notes", "binary:Summary", |r, v| r.notes = v),
        ]
    }
}

#[test]
fn test_discover_length_matches_mapped_string_leaves() {
    // Four mapped leaves: vendor is skipped, build contributes two.
    let attrs = discover(&Labeled::field_specs()).unwrap();
    assert_eq!(attrs.len(), 4);
}

#[test]
fn test_discover_depth_first_declaration_order() {
    let attrs = discover(&Labeled::field_specs()).unwrap();
    assert_eq!(
        attrs,
        vec!["binary:Package", "Version", "Architecture", "binary:Summary"]
    );
}

#[test]
fn test_discover_package_type() {
    let attrs = discover(&Package::field_specs()).unwrap();
    assert_eq!(attrs.len(), 7);
    assert_eq!(attrs[0], "binary:Package");
    assert_eq!(attrs[3], "source:Package");
    assert_eq!(attrs[6], "binary:Summary");
}

#[test]
fn test_discover_fails_on_non_string_mapped_leaf() {
    let specs: Vec<FieldSpec<Labeled>> = vec![
        FieldSpec::text("product", "binary:Package", |r, v| r.product = v),
        FieldSpec::unsupported("installed_size", "Installed-Size", "u64"),
        FieldSpec::text("notes", "binary:Summary", |r, v| r.notes = v),
    ];

    let err = discover(&specs).unwrap_err();
    assert_eq!(
        err,
        MapError::NonStringField {
            field: "installed_size",
            attr: "Installed-Size",
            ty: "u64",
        }
    );
}

#[test]
fn test_discover_error_message_names_field_and_type() {
    let specs: Vec<FieldSpec<Labeled>> =
        vec![FieldSpec::unsupported("count", "Count", "i64")];
    let message = discover(&specs).unwrap_err().to_string();
    assert!(message.contains("count"));
    assert!(message.contains("i64"));
}

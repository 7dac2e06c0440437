//! Integration tests for row decoding, including the round-trip
//! property between discovery order and decoded field order.

use dpkgmap::mapper::{decode, discover, FieldSpec, MapError, QueryRecord};
use dpkgmap::package::{Package, SourcePackage};

#[test]
fn test_decode_package_row() {
    let specs = Package::field_specs();
    let row = [
        "bash",
        "5.2.21-2ubuntu4",
        "amd64",
        "bash",
        "5.2.21-2ubuntu4",
        "5.2.21",
        "GNU Bourne Again SHell",
    ];

    let mut pkg = Package::default();
    let left = decode(&mut pkg, &specs, &row).unwrap();

    assert_eq!(left, 0);
    assert_eq!(
        pkg,
        Package {
            name: "bash".to_string(),
            version: "5.2.21-2ubuntu4".to_string(),
            arch: "amd64".to_string(),
            source: SourcePackage {
                name: "bash".to_string(),
                version: "5.2.21-2ubuntu4".to_string(),
                upstream_version: "5.2.21".to_string(),
            },
            summary: "GNU Bourne Again SHell".to_string(),
        }
    );
}

#[test]
fn test_decode_nested_record_lockstep() {
    // The spec.md §8 shape: a name leaf followed by a nested source record.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct Rec {
        name: String,
        src_name: String,
    }

    impl QueryRecord for Rec {
        fn field_specs() -> Vec<FieldSpec<Self>> {
            vec![
                FieldSpec::text("name", "P", |r, v| r.name = v),
                FieldSpec::record(
                    "source",
                    vec![FieldSpec::text("src_name", "S", |r, v| r.src_name = v)],
                ),
            ]
        }
    }

    let mut rec = Rec::default();
    let left = decode(&mut rec, &Rec::field_specs(), &["foo", "bar"]).unwrap();

    assert_eq!(left, 0);
    assert_eq!(rec.name, "foo");
    assert_eq!(rec.src_name, "bar");
}

#[test]
fn test_round_trip_preserves_field_values() {
    // Decode a well-formed row, then read the same leaves back in the
    // discovered order; the original row must come back exactly.
    let specs = Package::field_specs();
    let attrs = discover(&specs).unwrap();
    let row = ["libssl3", "3.0.13-1", "arm64", "openssl", "3.0.13-1", "3.0.13", "TLS library"];
    assert_eq!(attrs.len(), row.len());

    let mut pkg = Package::default();
    decode(&mut pkg, &specs, &row).unwrap();

    let extracted = [
        pkg.name.as_str(),
        pkg.version.as_str(),
        pkg.arch.as_str(),
        pkg.source.name.as_str(),
        pkg.source.version.as_str(),
        pkg.source.upstream_version.as_str(),
        pkg.summary.as_str(),
    ];
    assert_eq!(extracted, row);
}

#[test]
fn test_decode_short_row_signals_shortfall() {
    let mut pkg = Package::default();
    let err = decode(&mut pkg, &Package::field_specs(), &["bash", "5.2.21-2ubuntu4"])
        .unwrap_err();
    assert_eq!(err, MapError::RowTooShort { field: "arch" });
}

#[test]
fn test_decode_surplus_values_reported_not_consumed() {
    #[derive(Default)]
    struct One {
        name: String,
    }

    impl QueryRecord for One {
        fn field_specs() -> Vec<FieldSpec<Self>> {
            vec![FieldSpec::text("name", "binary:Package", |r, v| r.name = v)]
        }
    }

    let mut rec = One::default();
    let left = decode(&mut rec, &One::field_specs(), &["bash", "stray", "stray2"]).unwrap();
    assert_eq!(left, 2);
    assert_eq!(rec.name, "bash");
}

#[test]
fn test_skip_leaves_consume_nothing() {
    #[derive(Default)]
    struct Rec {
        name: String,
        internal: String,
        version: String,
    }

    impl QueryRecord for Rec {
        fn field_specs() -> Vec<FieldSpec<Self>> {
            vec![
                FieldSpec::text("name", "binary:Package", |r, v| r.name = v),
                FieldSpec::skip("internal"),
                FieldSpec::text("version", "Version", |r, v| r.version = v),
            ]
        }
    }

    let mut rec = Rec::default();
    let left = decode(&mut rec, &Rec::field_specs(), &["bash", "5.2"]).unwrap();

    assert_eq!(left, 0);
    assert_eq!(rec.name, "bash");
    assert_eq!(rec.internal, "");
    assert_eq!(rec.version, "5.2");
}

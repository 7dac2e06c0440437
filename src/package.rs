//! The package record types queried from dpkg.

use serde::{Deserialize, Serialize};

use crate::mapper::{FieldSpec, QueryRecord};

/// One installed binary package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Binary package name.
    pub name: String,
    /// Installed version.
    pub version: String,
    /// Architecture the package was built for.
    pub arch: String,
    /// The source package this binary was built from.
    pub source: SourcePackage,
    /// Short description.
    pub summary: String,
}

/// The source package a binary package was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePackage {
    /// Source package name.
    pub name: String,
    /// Source version, which can differ from the binary version.
    pub version: String,
    /// Upstream version with the Debian revision stripped.
    #[serde(rename = "upstreamVersion")]
    pub upstream_version: String,
}

impl QueryRecord for Package {
    fn field_specs() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::text("name", "binary:Package", |p, v| p.name = v),
            FieldSpec::text("version", "Version", |p, v| p.version = v),
            FieldSpec::text("arch", "Architecture", |p, v| p.arch = v),
            FieldSpec::record(
                "source",
                vec![
                    FieldSpec::text("name", "source:Package", |p, v| p.source.name = v),
                    FieldSpec::text("version", "source:Version", |p, v| p.source.version = v),
                    FieldSpec::text("upstream_version", "source:Upstream-Version", |p, v| {
                        p.source.upstream_version = v
                    }),
                ],
            ),
            FieldSpec::text("summary", "binary:Summary", |p, v| p.summary = v),
        ]
    }
}

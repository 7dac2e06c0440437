//! Annotation-driven mapping between record types and dpkg-query rows.
//!
//! A record type describes itself with one ordered field table
//! ([`FieldSpec`]), and every operation in this module is a traversal of
//! that same table:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Vec<FieldSpec<T>>  (one table)              │
//! │                                                             │
//! │   discover ──► ["binary:Package", "Version", ...]           │
//! │                      │                                      │
//! │                      ▼                                      │
//! │   compile  ──► "${binary:Package}\t${Version}\t...\n"       │
//! │                                                             │
//! │   decode   ◄── "bash\t5.2.21-2\t..."  (one row per record)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because discovery and decoding walk the identical table with the
//! identical depth-first algorithm, position `i` in the compiled query
//! always corresponds to position `i` in every decoded row. Nested
//! records are walked in place, splicing their leaves into the parent's
//! order at the point of declaration.
//!
//! # Example
//!
//! ```
//! use dpkgmap::mapper::{compile, decode, discover, FieldSpec, QueryRecord};
//!
//! #[derive(Default)]
//! struct Pkg {
//!     name: String,
//!     version: String,
//! }
//!
//! impl QueryRecord for Pkg {
//!     fn field_specs() -> Vec<FieldSpec<Self>> {
//!         vec![
//!             FieldSpec::text("name", "binary:Package", |p, v| p.name = v),
//!             FieldSpec::text("version", "Version", |p, v| p.version = v),
//!         ]
//!     }
//! }
//!
//! let specs = Pkg::field_specs();
//! let attrs = discover(&specs).unwrap();
//! assert_eq!(compile(&attrs), "${binary:Package}\\t${Version}\\n");
//!
//! let mut pkg = Pkg::default();
//! let left = decode(&mut pkg, &specs, &["bash", "5.2.21-2"]).unwrap();
//! assert_eq!(left, 0);
//! assert_eq!(pkg.name, "bash");
//! ```

mod decode;
mod error;
mod query;
mod schema;

pub use decode::decode;
pub use error::{MapError, MapResult};
pub use query::{compile, FIELD_SEPARATOR, ROW_TERMINATOR};
pub use schema::{discover, FieldSpec, QueryRecord};

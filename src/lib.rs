//! # dpkgmap
//!
//! Extracts installed-package metadata from a dpkg database and turns
//! dpkg-query's flat tab-separated output into typed records.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Record type + field table (mapper module)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [discover + compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │   dpkg-query format string  "${attr}\t${attr}\t...\n"   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [QueryRunner: host or container]
//! ┌─────────────────────────────────────────────────────────┐
//! │        dpkg-query output, one tab-split row per pkg     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [decode]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Vec<Package>                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! One field table per record type drives both query compilation and
//! row decoding, so placeholder order and row order can never drift
//! apart.

pub mod dpkg;
pub mod mapper;
pub mod package;

pub use dpkg::{present, ContainerRunner, Dpkg, DpkgError, DpkgResult, LocalRunner, QueryRunner};
pub use mapper::{FieldSpec, MapError, MapResult, QueryRecord};
pub use package::{Package, SourcePackage};

//! dpkg-query invocation and record extraction.
//!
//! The mapper (see [`crate::mapper`]) turns a field table into a format
//! string and back; this module owns everything around the external
//! tool:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Dpkg                                │
//! │  discover ──► compile ──► QueryRunner::command ──► invoke    │
//! │                                                      │       │
//! │           decode ◄── split rows on '\t' ◄── stdout ◄─┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`QueryRunner`] seam decides *where* dpkg-query runs: on the host
//! ([`LocalRunner`]) or inside a container image ([`ContainerRunner`]).
//! Everything is synchronous; the only blocking point is the child
//! process itself, and callers needing cancellation must wrap the call
//! with their own mechanism.
//!
//! # Example
//!
//! ```no_run
//! use dpkgmap::dpkg::Dpkg;
//! use dpkgmap::package::Package;
//!
//! let mut packages: Vec<Package> = Vec::new();
//! Dpkg::new().metadata(&mut packages)?;
//! # Ok::<(), dpkgmap::dpkg::DpkgError>(())
//! ```

mod engine;
mod error;
mod runner;

pub use engine::Dpkg;
pub use error::{DpkgError, DpkgResult};
pub use runner::{present, ContainerRunner, LocalRunner, QueryRunner};

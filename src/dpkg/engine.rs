//! The extraction engine tying discovery, invocation and decoding together.

use std::process::Command;

use tracing::error;

use super::error::{DpkgError, DpkgResult};
use super::runner::{LocalRunner, QueryRunner};
use crate::mapper::{compile, decode, discover, QueryRecord};

/// Extracts package metadata from a dpkg database.
///
/// The engine compiles a record type's field table into a dpkg-query
/// format string, runs the tool through its [`QueryRunner`], and decodes
/// every output line back into an instance of the record type.
pub struct Dpkg {
    runner: Box<dyn QueryRunner>,
}

impl Dpkg {
    /// Engine querying the host's package database.
    pub fn new() -> Self {
        Self::with_runner(Box::new(LocalRunner))
    }

    /// Engine with a custom query strategy (e.g. [`ContainerRunner`]).
    ///
    /// [`ContainerRunner`]: super::runner::ContainerRunner
    pub fn with_runner(runner: Box<dyn QueryRunner>) -> Self {
        Self { runner }
    }

    /// Populate `packages` with one record per installed package.
    ///
    /// Any prior contents of `packages` are replaced. Rows are decoded
    /// into a private buffer first, so on error the destination is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`DpkgError::Map`] if the field table is malformed (detected
    ///   before any subprocess runs) or a row runs short.
    /// * [`DpkgError::Spawn`] / [`DpkgError::QueryFailed`] if the tool
    ///   cannot be started or exits non-zero. The tool's stderr is
    ///   logged before the error is returned.
    /// * [`DpkgError::RowMismatch`] if a row carries more fields than
    ///   the compiled query requested.
    pub fn metadata<T: QueryRecord>(&self, packages: &mut Vec<T>) -> DpkgResult<()> {
        let specs = T::field_specs();
        let attrs = discover(&specs)?;
        let format = compile(&attrs);

        let stdout = invoke(self.runner.command(&format))?;
        let stdout = String::from_utf8_lossy(&stdout);

        let mut decoded = Vec::new();
        for line in stdout.lines() {
            let values: Vec<&str> = line.split('\t').collect();
            let mut record = T::default();
            let left = decode(&mut record, &specs, &values)?;
            if left > 0 {
                return Err(DpkgError::RowMismatch { unconsumed: left });
            }
            decoded.push(record);
        }

        *packages = decoded;
        Ok(())
    }
}

impl Default for Dpkg {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the query command, capturing stdout and stderr separately.
///
/// On non-zero exit the captured stderr is logged and the call fails;
/// stdout is discarded in that case. On success stdout is returned
/// verbatim, one line per package.
fn invoke(mut cmd: Command) -> DpkgResult<Vec<u8>> {
    let output = cmd.output().map_err(DpkgError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        error!(status = %output.status, "dpkg-query failed: {}", stderr.trim_end());
        return Err(DpkgError::QueryFailed {
            status: output.status,
            stderr,
        });
    }

    Ok(output.stdout)
}

//! Mapper-specific error types.

use thiserror::Error;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors raised while walking a field table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A field is mapped to a dpkg-query attribute but its declared type
    /// is not `String`. The mapper only fills string leaves.
    #[error("field `{field}` is mapped to `{attr}` but declared as {ty}, not String")]
    NonStringField {
        /// Name of the offending field.
        field: &'static str,
        /// The dpkg-query attribute the field is mapped to.
        attr: &'static str,
        /// The field's declared type name.
        ty: &'static str,
    },

    /// A row ran out of values before the field table was exhausted.
    #[error("row ended before field `{field}` was filled")]
    RowTooShort {
        /// First field left unfilled.
        field: &'static str,
    },
}

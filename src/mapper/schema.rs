//! Field tables and attribute discovery.

use super::error::{MapError, MapResult};

/// One entry in a record type's field table, in declaration order.
///
/// Leaf setters always project through the outermost record type `T`,
/// so a [`FieldSpec::Record`] group carries its nesting structure for
/// traversal purposes while staying monomorphic in `T`.
pub enum FieldSpec<T> {
    /// String leaf mapped to a dpkg-query attribute.
    Text {
        /// Field name, used in diagnostics.
        name: &'static str,
        /// The dpkg-query attribute (e.g. `binary:Package`).
        attr: &'static str,
        /// Writes a decoded value into the record.
        set: fn(&mut T, String),
    },

    /// Leaf without a mapping; invisible to both discovery and decoding.
    Skip {
        /// Field name, used in diagnostics.
        name: &'static str,
    },

    /// Leaf mapped to an attribute but declared with a type the mapper
    /// cannot fill. Field tables are written by hand, so the mistake is
    /// recorded rather than silently dropped; discovery rejects the table
    /// before any subprocess runs.
    Unsupported {
        /// Field name, used in diagnostics.
        name: &'static str,
        /// The attribute the field was (wrongly) mapped to.
        attr: &'static str,
        /// The field's declared type name.
        ty: &'static str,
    },

    /// Nested record; its leaves splice into the parent's order here.
    Record {
        /// Field name, used in diagnostics.
        name: &'static str,
        /// The nested record's own field table.
        fields: Vec<FieldSpec<T>>,
    },
}

impl<T> FieldSpec<T> {
    /// A string leaf mapped to a dpkg-query attribute.
    pub fn text(name: &'static str, attr: &'static str, set: fn(&mut T, String)) -> Self {
        Self::Text { name, attr, set }
    }

    /// A leaf the mapper ignores.
    pub fn skip(name: &'static str) -> Self {
        Self::Skip { name }
    }

    /// A mapped leaf with an unfillable declared type.
    pub fn unsupported(name: &'static str, attr: &'static str, ty: &'static str) -> Self {
        Self::Unsupported { name, attr, ty }
    }

    /// A nested record field.
    pub fn record(name: &'static str, fields: Vec<FieldSpec<T>>) -> Self {
        Self::Record { name, fields }
    }
}

/// A record type that can be populated from dpkg-query output.
///
/// Implementors supply a single field table; the same table drives both
/// query compilation and row decoding, which is what keeps the two in
/// positional agreement.
pub trait QueryRecord: Default {
    /// The field table, in declaration order.
    fn field_specs() -> Vec<FieldSpec<Self>>
    where
        Self: Sized;
}

/// Collect the dpkg-query attributes of a field table, depth-first in
/// declaration order.
///
/// Nested records contribute their leaves at the point of declaration.
/// Unmapped leaves are skipped. A mapped leaf whose declared type is not
/// `String` fails the whole discovery; no partial list is returned.
///
/// # Errors
///
/// Returns [`MapError::NonStringField`] for the first unfillable mapped
/// leaf encountered.
pub fn discover<T>(fields: &[FieldSpec<T>]) -> MapResult<Vec<&'static str>> {
    let mut attrs = Vec::new();
    collect(fields, &mut attrs)?;
    Ok(attrs)
}

fn collect<T>(fields: &[FieldSpec<T>], out: &mut Vec<&'static str>) -> MapResult<()> {
    for field in fields {
        match field {
            FieldSpec::Record { fields, .. } => collect(fields, out)?,
            FieldSpec::Skip { .. } => {}
            FieldSpec::Text { attr, .. } => out.push(attr),
            FieldSpec::Unsupported { name, attr, ty } => {
                return Err(MapError::NonStringField {
                    field: name,
                    attr,
                    ty,
                })
            }
        }
    }
    Ok(())
}

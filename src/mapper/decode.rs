//! Row decoding: the mirror traversal of attribute discovery.

use super::error::{MapError, MapResult};
use super::schema::FieldSpec;

/// Walk a field table, consuming `values` from the front and assigning
/// each mapped string leaf the next unconsumed value.
///
/// The traversal is the same depth-first declaration-order walk as
/// [`discover`](super::discover): a nested record recurses with the
/// unconsumed tail and the cursor advances by whatever the recursion
/// consumed; unmapped leaves are passed over without consuming anything.
///
/// Returns the number of values left unconsumed at this level. The
/// caller decides what a nonzero remainder at the top level means (the
/// orchestrator treats it as a fatal query/row mismatch).
///
/// # Errors
///
/// * [`MapError::RowTooShort`] if the values run out before the table
///   does, naming the first unfilled field.
/// * [`MapError::NonStringField`] for an unfillable mapped leaf. The
///   table was normally already validated by discovery, but the decoder
///   re-checks rather than trusting the caller.
pub fn decode<T>(target: &mut T, fields: &[FieldSpec<T>], values: &[&str]) -> MapResult<usize> {
    let mut cursor = 0;
    for field in fields {
        match field {
            FieldSpec::Record { fields, .. } => {
                let tail = &values[cursor..];
                let left = decode(target, fields, tail)?;
                cursor += tail.len() - left;
            }
            FieldSpec::Skip { .. } => {}
            FieldSpec::Text { name, set, .. } => {
                let Some(value) = values.get(cursor) else {
                    return Err(MapError::RowTooShort { field: name });
                };
                set(target, (*value).to_string());
                cursor += 1;
            }
            FieldSpec::Unsupported { name, attr, ty } => {
                return Err(MapError::NonStringField {
                    field: name,
                    attr,
                    ty,
                });
            }
        }
    }
    Ok(values.len() - cursor)
}

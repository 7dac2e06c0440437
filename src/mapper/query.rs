//! Format-string compilation for dpkg-query.

/// Separator between placeholders in the compiled format string.
///
/// This is the literal two-character sequence `\t`, not a tab:
/// dpkg-query expands backslash escapes in its `-f` format itself, so
/// the escape sequence is what the tool expects on its command line.
/// The expanded output rows then contain real tab characters.
pub const FIELD_SEPARATOR: &str = r"\t";

/// Terminator appended after the last placeholder, again as the literal
/// escape sequence dpkg-query expands to a newline.
pub const ROW_TERMINATOR: &str = r"\n";

/// Compile an ordered attribute list into a dpkg-query format string.
///
/// Each attribute becomes a `${attribute}` placeholder; placeholders are
/// separated by [`FIELD_SEPARATOR`] and the row ends with
/// [`ROW_TERMINATOR`]. Placeholder order is the contract the row decoder
/// relies on: position `i` here is position `i` in every output row.
pub fn compile(attrs: &[&'static str]) -> String {
    let mut query = String::new();
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            query.push_str(FIELD_SEPARATOR);
        }
        query.push_str("${");
        query.push_str(attr);
        query.push('}');
    }
    query.push_str(ROW_TERMINATOR);
    query
}

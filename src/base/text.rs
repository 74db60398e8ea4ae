//! Character classes and quoting shared by the scanner and the printers.

/// Check if a character may appear in an unquoted string.
///
/// Unquoted strings are made of ASCII letters, digits and `_ - . +`.
#[inline]
pub fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Check if a character opens a quoted string.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Check if a character may start an identifier.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character may continue an identifier.
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if `text` can be written without quotes and read back unchanged.
pub fn is_unquoted_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_unquoted_char) && !text.contains("..")
}

/// Quote `text`, preferring double quotes unless the text contains one.
///
/// Only the chosen quote and backslash are escaped, matching what the
/// scanner accepts.
pub fn quote(text: &str) -> String {
    let delimiter = if text.contains('"') && !text.contains('\'') {
        '\''
    } else {
        '"'
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        if c == delimiter || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delimiter);
    out
}

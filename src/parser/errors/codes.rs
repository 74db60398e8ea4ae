//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Unexpected characters (signs, punctuation, literals)
//! - E02xx: Structural errors (unclosed compounds and lists, list sections)
//! - E03xx: Unknown names and values
//! - E04xx: Duplicates
//! - E05xx: Type mismatches
//! - E06xx: Out-of-range values
//! - E07xx: Keyword-argument schema violations
//! - E09xx: Resource limits

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering and stable assertions in host frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Unexpected characters
    // =========================================================================
    /// Unexpected or missing punctuation
    E0101,
    /// A sign (`:`, `=`, `<`, ...) was required but absent
    E0102,
    /// Unterminated quoted string
    E0103,
    /// Invalid escape sequence in a quoted string
    E0104,
    /// Invalid numeric literal
    E0105,
    /// A value was required but nothing was found
    E0106,
    /// Input left over after a complete parse
    E0107,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed compound `{`
    E0201,
    /// Unclosed list `[`
    E0202,
    /// More than one `;` in a function list
    E0204,
    /// `;` after the ellipsis in a function list
    E0205,
    /// More than one `...` in a function list
    E0206,
    /// Compounds and lists nested too deeply
    E0207,
    /// Input longer than the configured limit
    E0208,

    // =========================================================================
    // E03xx: Unknown names
    // =========================================================================
    /// Unknown keyword argument name
    E0301,
    /// Unknown enumerant or shape name
    E0302,
    /// Malformed identifier
    E0303,

    // =========================================================================
    // E04xx: Duplicates
    // =========================================================================
    /// Duplicate compound key
    E0401,
    /// Duplicate keyword argument
    E0402,
    /// Duplicate positional list index
    E0403,

    // =========================================================================
    // E05xx: Type mismatches
    // =========================================================================
    /// Value present but of the wrong kind
    E0501,
    /// Invalid regular expression
    E0502,

    // =========================================================================
    // E06xx: Out of range
    // =========================================================================
    /// Numeric bound violated
    E0601,

    // =========================================================================
    // E07xx: Keyword-argument schema
    // =========================================================================
    /// Required keyword argument missing at access time
    E0701,

    // =========================================================================
    // E09xx: Resource limits
    // =========================================================================
    /// Iteration bound exceeded
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0107 => "E0107",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0601 => "E0601",
            Self::E0701 => "E0701",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101
            | Self::E0102
            | Self::E0103
            | Self::E0104
            | Self::E0105
            | Self::E0106
            | Self::E0107 => "unexpected character",
            Self::E0201
            | Self::E0202
            | Self::E0204
            | Self::E0205
            | Self::E0206
            | Self::E0207
            | Self::E0208 => "structural error",
            Self::E0301 | Self::E0302 | Self::E0303 => "unknown name",
            Self::E0401 | Self::E0402 | Self::E0403 => "duplicate",
            Self::E0501 | Self::E0502 => "type mismatch",
            Self::E0601 => "out of range",
            Self::E0701 => "missing required",
            Self::E0902 => "resource limit",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected character",
            Self::E0102 => "sign expected",
            Self::E0103 => "unterminated quoted string",
            Self::E0104 => "invalid escape sequence",
            Self::E0105 => "invalid number",
            Self::E0106 => "expected value",
            Self::E0107 => "unexpected trailing input",
            Self::E0201 => "unclosed compound",
            Self::E0202 => "unclosed list",
            Self::E0204 => "duplicate ';' in list",
            Self::E0205 => "';' after '...'",
            Self::E0206 => "duplicate '...' in list",
            Self::E0207 => "nesting too deep",
            Self::E0208 => "input too long",
            Self::E0301 => "unknown argument name",
            Self::E0302 => "unknown value",
            Self::E0303 => "invalid identifier",
            Self::E0401 => "duplicate key",
            Self::E0402 => "duplicate argument name",
            Self::E0403 => "duplicate list index",
            Self::E0501 => "type mismatch",
            Self::E0502 => "invalid regular expression",
            Self::E0601 => "value out of range",
            Self::E0701 => "missing required argument",
            Self::E0902 => "too many iterations",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0204 | Self::E0205 | Self::E0206
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

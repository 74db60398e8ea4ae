//! Logos-based classifier for unquoted SNBT primitives
//!
//! An unquoted token such as `12b`, `3.5f` or `true` is read by the scanner
//! first and then classified here. A token only counts as a number when a
//! single numeric literal spans all of it; anything else is a string.

use logos::Logos;

use crate::syntax::Nbt;

/// Logos token enum for primitive literals
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveToken {
    #[token("true")]
    True,

    #[token("false")]
    False,

    // =========================================================================
    // INTEGERS
    // =========================================================================
    #[regex(r"[-+]?(0|[1-9][0-9]*)[bB]")]
    Byte,

    #[regex(r"[-+]?(0|[1-9][0-9]*)[sS]")]
    Short,

    #[regex(r"[-+]?(0|[1-9][0-9]*)[lL]")]
    Long,

    #[regex(r"[-+]?(0|[1-9][0-9]*)")]
    Int,

    // =========================================================================
    // FLOATING POINT
    // =========================================================================
    #[regex(r"[-+]?([0-9]+\.?|[0-9]*\.[0-9]+)([eE][-+]?[0-9]+)?[fF]")]
    Float,

    #[regex(r"[-+]?([0-9]+\.?|[0-9]*\.[0-9]+)([eE][-+]?[0-9]+)?[dD]")]
    SuffixedDouble,

    /// A double needs a fraction or an exponent when it has no suffix
    #[regex(r"[-+]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?")]
    #[regex(r"[-+]?[0-9]+[eE][-+]?[0-9]+")]
    Double,
}

/// Determine which literal, if any, spans the whole of `token`.
pub fn classify(token: &str) -> Option<PrimitiveToken> {
    let mut lexer = PrimitiveToken::lexer(token);
    match lexer.next() {
        Some(Ok(kind)) if lexer.span().end == token.len() => Some(kind),
        _ => None,
    }
}

/// Turn an unquoted token into an NBT value.
///
/// Numbers that overflow their type fall back to strings.
pub fn primitive(token: &str) -> Nbt {
    let Some(kind) = classify(token) else {
        return Nbt::String(token.to_string());
    };
    let digits = || &token[..token.len() - 1];
    let value = match kind {
        PrimitiveToken::True => Some(Nbt::Byte(1)),
        PrimitiveToken::False => Some(Nbt::Byte(0)),
        PrimitiveToken::Byte => digits().parse().ok().map(Nbt::Byte),
        PrimitiveToken::Short => digits().parse().ok().map(Nbt::Short),
        PrimitiveToken::Long => digits().parse().ok().map(Nbt::Long),
        PrimitiveToken::Int => token.parse().ok().map(Nbt::Int),
        PrimitiveToken::Float => digits()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Nbt::Float),
        PrimitiveToken::SuffixedDouble => digits()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Nbt::Double),
        PrimitiveToken::Double => token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Nbt::Double),
    };
    value.unwrap_or_else(|| Nbt::String(token.to_string()))
}

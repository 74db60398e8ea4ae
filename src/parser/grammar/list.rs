//! Generic list parsing
//!
//! Predicate lists are a comma (or whitespace) separated run of elements.
//! Where the dialect allows it an element may carry an explicit index:
//!
//! ```text
//! list    = '[' (element (sep element)*)? ']'
//! element = index sign value | value
//! sep     = ',' | whitespace followed by an element
//! ```
//!
//! Function lists add two section markers. `;` divides replacement
//! values and in-place edits (left) from insertions (right); `...` marks
//! where the elements of the original list are kept.

use rustc_hash::FxHashSet;
use text_size::TextRange;
use tracing::trace;

use crate::base::text_range;
use crate::ide::{PendingSuggestions, Suggestion, owned};
use crate::parser::errors::{ErrorCode, ParseResult, SyntaxError};
use crate::parser::sign::{ParsedSign, Sign, SignSet};
use crate::parser::state::ParserState;

/// One list element.
#[derive(Debug, Clone, PartialEq)]
pub enum ListElement<V> {
    Positional { index: i32, value: V },
    Bare(V),
}

/// Describes one flavour of list element.
pub trait ListDialect {
    type Value;

    /// Whether elements may be written as `index sign value`.
    fn positional(&self) -> bool;

    /// Signs allowed between an index and its value.
    fn signs(&self) -> SignSet;

    /// Parse an element without an index.
    fn parse_bare(&self, state: &mut ParserState<'_>) -> ParseResult<Self::Value>;

    /// Parse the value after `index sign`.
    fn parse_positional(&self, state: &mut ParserState<'_>, sign: ParsedSign)
    -> ParseResult<Self::Value>;
}

/// A positional attempt that failed before the bare retry succeeded.
#[derive(Debug, Clone)]
pub struct Abandoned {
    error: SyntaxError,
    pending: PendingSuggestions,
}

impl Abandoned {
    /// Raise the abandoned failure instead of `other` if it got further.
    ///
    /// Suggestions recorded at the same offset by both attempts are kept.
    fn resolve(self, state: &mut ParserState<'_>, other: SyntaxError, on_tie: bool) -> SyntaxError {
        let later = self.error.start() > other.start();
        let tie = self.error.start() == other.start();
        if later || (on_tie && tie) {
            let mut pending = self.pending;
            if pending.start() == state.pending().start() {
                pending.merge(state.pending().clone());
            }
            state.replace_pending(pending);
            self.error
        } else {
            other
        }
    }
}

fn starts_with_index(state: &ParserState<'_>) -> bool {
    match state.scanner.peek() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => state.scanner.peek_nth(1).is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn can_start_element(c: char) -> bool {
    !matches!(c, ',' | ']' | '}' | ';')
}

/// Parse one element, trying the positional form first when it may apply.
pub fn parse_element<D: ListDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<(ListElement<D::Value>, Option<Abandoned>)> {
    if dialect.positional() && starts_with_index(state) {
        let mark = state.mark();
        match positional(state, dialect) {
            Ok(element) => return Ok((element, None)),
            Err(error) => {
                trace!(offset = mark.cursor(), code = %error.code, "retrying element without index");
                let abandoned = Abandoned {
                    error,
                    pending: state.pending().clone(),
                };
                state.reset(mark);
                return match dialect.parse_bare(state) {
                    Ok(value) => Ok((ListElement::Bare(value), Some(abandoned))),
                    Err(bare) => Err(abandoned.resolve(state, bare, true)),
                };
            }
        }
    }
    dialect
        .parse_bare(state)
        .map(|value| (ListElement::Bare(value), None))
}

fn positional<D: ListDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<ListElement<D::Value>> {
    state.restoring(|state| {
        let index = state.scanner.read_i32()?;
        let sign = dialect.signs().parse(state, true, Sign::Match)?;
        let value = dialect.parse_positional(state, sign)?;
        Ok(ListElement::Positional { index, value })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Comma,
    Space,
    Close,
    Semicolon,
}

fn separator(
    state: &mut ParserState<'_>,
    open_at: usize,
    offer_semicolon: bool,
) -> ParseResult<Separator> {
    let skipped = state.scanner.skip_whitespace();
    let mut items = vec![Suggestion::new(","), Suggestion::new("]")];
    if offer_semicolon {
        items.push(Suggestion::new(";").with_tooltip("start insertions"));
    }
    state.suggest(owned(items));

    if state.scanner.eat(',') {
        return Ok(Separator::Comma);
    }
    if state.scanner.eat(']') {
        return Ok(Separator::Close);
    }
    match state.scanner.peek() {
        None => Err(state
            .error_from(open_at, ErrorCode::E0202, "unclosed list")
            .with_hint("add ']'")),
        Some(';') => Ok(Separator::Semicolon),
        Some(c) if skipped && can_start_element(c) => Ok(Separator::Space),
        Some(found) => Err(state.error_here(
            ErrorCode::E0101,
            format!("expected ',' or ']', found '{found}'"),
        )),
    }
}

/// Parse a predicate list.
///
/// Positional indices must be unique (E0403).
pub fn parse_list<D: ListDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<Vec<ListElement<D::Value>>> {
    state.restoring(|state| {
        state.nested(|state| {
            let open_at = state.cursor();
            state.expect('[')?;
            let mut elements = Vec::new();
            let mut indices = FxHashSet::default();

            state.scanner.skip_whitespace();
            state.suggest(owned(vec![Suggestion::new("]")]));
            if state.scanner.eat(']') {
                state.clear_suggestions();
                return Ok(elements);
            }

            loop {
                let element_start = state.cursor();
                let (element, abandoned) = parse_element(state, dialect)?;
                if let ListElement::Positional { index, .. } = &element {
                    if !indices.insert(*index) {
                        return Err(state.error_from(
                            element_start,
                            ErrorCode::E0403,
                            format!("duplicate list index {index}"),
                        ));
                    }
                }
                elements.push(element);

                match separator(state, open_at, false) {
                    Ok(Separator::Comma) => {
                        state.scanner.skip_whitespace();
                    }
                    Ok(Separator::Space) => {}
                    Ok(Separator::Close) => {
                        state.clear_suggestions();
                        return Ok(elements);
                    }
                    Ok(Separator::Semicolon) => {
                        return Err(state.error_here(
                            ErrorCode::E0101,
                            "expected ',' or ']', found ';'",
                        ));
                    }
                    Err(err) => {
                        return Err(match abandoned {
                            Some(abandoned) => abandoned.resolve(state, err, false),
                            None => err,
                        });
                    }
                }
            }
        })
    })
}

// =============================================================================
// Function lists
// =============================================================================

/// Elements of a function list grouped by section.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionListBody<V> {
    /// Replacement values and in-place edits
    pub left: Vec<ListElement<V>>,
    /// Insertions before the kept elements
    pub right_before: Vec<ListElement<V>>,
    /// Insertions after the kept elements
    pub right_after: Vec<ListElement<V>>,
    pub has_semicolon: bool,
    pub has_ellipsis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Left,
    RightBefore,
    RightAfter,
}

struct BodyBuilder<V> {
    left: Vec<(ListElement<V>, TextRange)>,
    right_before: Vec<ListElement<V>>,
    right_after: Vec<ListElement<V>>,
    has_semicolon: bool,
    has_ellipsis: bool,
    section: Section,
}

impl<V> BodyBuilder<V> {
    fn new() -> Self {
        Self {
            left: Vec::new(),
            right_before: Vec::new(),
            right_after: Vec::new(),
            has_semicolon: false,
            has_ellipsis: false,
            section: Section::Left,
        }
    }

    fn semicolon_allowed(&self) -> bool {
        !self.has_semicolon && !self.has_ellipsis
    }

    fn offer(&self, state: &mut ParserState<'_>, close: bool) {
        let mut items = Vec::new();
        if close {
            items.push(Suggestion::new("]"));
        }
        if self.semicolon_allowed() {
            items.push(Suggestion::new(";").with_tooltip("start insertions"));
        }
        if !self.has_ellipsis {
            items.push(Suggestion::new("...").with_tooltip("keep existing elements"));
        }
        state.suggest(owned(items));
    }

    fn semicolon(&mut self, at: usize) -> ParseResult<()> {
        if self.has_semicolon {
            return Err(SyntaxError::new(
                "duplicate ';' in list",
                text_range(at, at + 1),
                ErrorCode::E0204,
            ));
        }
        if self.has_ellipsis {
            return Err(semicolon_after_ellipsis(at));
        }
        self.has_semicolon = true;
        self.section = Section::RightBefore;
        Ok(())
    }

    fn ellipsis(&mut self, at: usize) -> ParseResult<()> {
        if self.has_ellipsis {
            return Err(SyntaxError::new(
                "duplicate '...' in list",
                text_range(at, at + 3),
                ErrorCode::E0206,
            ));
        }
        self.has_ellipsis = true;
        if self.section == Section::Left {
            trace!(count = self.left.len(), "moving elements before '...' into insertions");
            for (element, range) in std::mem::take(&mut self.left) {
                if let ListElement::Positional { index, .. } = &element {
                    if *index < 0 {
                        return Err(negative_insertion(*index, range));
                    }
                }
                self.right_before.push(element);
            }
        }
        self.section = Section::RightAfter;
        Ok(())
    }

    fn push(&mut self, element: ListElement<V>, range: TextRange) -> ParseResult<()> {
        if self.section != Section::Left {
            if let ListElement::Positional { index, .. } = &element {
                if *index < 0 {
                    return Err(negative_insertion(*index, range));
                }
            }
        }
        match self.section {
            Section::Left => self.left.push((element, range)),
            Section::RightBefore => self.right_before.push(element),
            Section::RightAfter => self.right_after.push(element),
        }
        Ok(())
    }

    fn finish(self) -> FunctionListBody<V> {
        FunctionListBody {
            left: self.left.into_iter().map(|(element, _)| element).collect(),
            right_before: self.right_before,
            right_after: self.right_after,
            has_semicolon: self.has_semicolon,
            has_ellipsis: self.has_ellipsis,
        }
    }
}

fn semicolon_after_ellipsis(at: usize) -> SyntaxError {
    SyntaxError::new("';' after '...'", text_range(at, at + 1), ErrorCode::E0205)
        .with_hint("insertions after '...' need no ';'")
}

fn negative_insertion(index: i32, range: TextRange) -> SyntaxError {
    SyntaxError::new(
        format!("insertion index {index} must not be negative"),
        range,
        ErrorCode::E0601,
    )
    .with_hint("after '...' indices already count from the end")
}

/// Parse a function list into its sections.
pub fn parse_function_list<D: ListDialect>(
    state: &mut ParserState<'_>,
    dialect: &D,
) -> ParseResult<FunctionListBody<D::Value>> {
    state.restoring(|state| {
        state.nested(|state| {
            let open_at = state.cursor();
            state.expect('[')?;
            let mut body = BodyBuilder::new();

            state.scanner.skip_whitespace();
            body.offer(state, true);
            if state.scanner.eat(']') {
                state.clear_suggestions();
                return Ok(body.finish());
            }

            loop {
                let item_start = state.cursor();

                if state.scanner.eat_str("...") {
                    body.ellipsis(item_start)?;
                    match separator(state, open_at, false)? {
                        Separator::Comma => {
                            state.scanner.skip_whitespace();
                            body.offer(state, false);
                            continue;
                        }
                        Separator::Close => break,
                        Separator::Semicolon => {
                            return Err(semicolon_after_ellipsis(state.cursor()));
                        }
                        Separator::Space => {
                            return Err(state.error_here(
                                ErrorCode::E0101,
                                "expected ',' or ']' after '...'",
                            ));
                        }
                    }
                }

                if state.scanner.eat(';') {
                    body.semicolon(item_start)?;
                    state.scanner.skip_whitespace();
                    body.offer(state, true);
                    if state.scanner.eat(']') {
                        break;
                    }
                    continue;
                }

                let (element, abandoned) = parse_element(state, dialect)?;
                body.push(element, state.scanner.range_from(item_start))?;

                let next = match separator(state, open_at, body.semicolon_allowed()) {
                    Ok(separator) => separator,
                    Err(err) => {
                        return Err(match abandoned {
                            Some(abandoned) => abandoned.resolve(state, err, false),
                            None => err,
                        });
                    }
                };
                match next {
                    Separator::Comma => {
                        state.scanner.skip_whitespace();
                        body.offer(state, false);
                    }
                    Separator::Space => {}
                    Separator::Close => break,
                    Separator::Semicolon => {
                        let at = state.cursor();
                        state.scanner.bump();
                        body.semicolon(at)?;
                        state.scanner.skip_whitespace();
                        body.offer(state, true);
                        if state.scanner.eat(']') {
                            break;
                        }
                    }
                }
            }

            state.clear_suggestions();
            Ok(body.finish())
        })
    })
}

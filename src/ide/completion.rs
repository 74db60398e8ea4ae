//! Completion suggestions implementation.
//!
//! Grammars do not build suggestion lists while they parse. They record
//! deferred [`SuggestionProducer`]s together with the offset the
//! suggestions apply from, and the caller materializes them with
//! [`PendingSuggestions::resolve`] once parsing is over.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::{text_range, text_size};

/// A single completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// The text to insert at the anchor.
    pub text: SmolStr,
    /// Short description shown next to the candidate.
    pub tooltip: Option<Arc<str>>,
}

impl Suggestion {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            tooltip: None,
        }
    }

    /// Set the tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<Arc<str>>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// What a producer sees when suggestions are materialized.
#[derive(Clone, Copy, Debug)]
pub struct SuggestionContext<'a> {
    /// The complete input.
    pub input: &'a str,
    /// Byte offset the suggestions replace from.
    pub start: usize,
}

impl<'a> SuggestionContext<'a> {
    /// Text typed between the anchor and the end of input.
    pub fn typed(&self) -> &'a str {
        &self.input[self.start..]
    }
}

/// Deferred computation of completion candidates.
pub type SuggestionProducer = Arc<dyn Fn(&SuggestionContext<'_>) -> Vec<Suggestion> + Send + Sync>;

/// Producer for a single fixed candidate.
pub fn literal(text: &'static str, tooltip: Option<&'static str>) -> SuggestionProducer {
    Arc::new(move |_| {
        let suggestion = Suggestion::new(text);
        vec![match tooltip {
            Some(tooltip) => suggestion.with_tooltip(tooltip),
            None => suggestion,
        }]
    })
}

/// Producer for a fixed list of `(text, tooltip)` candidates.
pub fn literals(items: &'static [(&'static str, &'static str)]) -> SuggestionProducer {
    Arc::new(move |_| {
        items
            .iter()
            .map(|(text, tooltip)| Suggestion::new(*text).with_tooltip(*tooltip))
            .collect()
    })
}

/// Producer for fixed candidates without tooltips.
pub fn words(items: &'static [&'static str]) -> SuggestionProducer {
    Arc::new(move |_| items.iter().map(|text| Suggestion::new(*text)).collect())
}

/// Producer for an owned list computed while parsing.
pub fn owned(items: Vec<Suggestion>) -> SuggestionProducer {
    Arc::new(move |_| items.clone())
}

/// The suggestions recorded by a parse, not yet materialized.
#[derive(Clone, Default)]
pub struct PendingSuggestions {
    start: usize,
    producers: Vec<SuggestionProducer>,
}

impl fmt::Debug for PendingSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSuggestions")
            .field("start", &self.start)
            .field("producers", &self.producers.len())
            .finish()
    }
}

impl PendingSuggestions {
    /// Byte offset the suggestions are anchored at.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub(crate) fn replace(&mut self, start: usize, producers: Vec<SuggestionProducer>) {
        self.start = start;
        self.producers = producers;
    }

    /// Extend when anchored at `start`, replace otherwise.
    pub(crate) fn extend(&mut self, start: usize, producers: Vec<SuggestionProducer>) {
        if self.start == start {
            self.producers.extend(producers);
        } else {
            self.replace(start, producers);
        }
    }

    /// Keep both lists when they share an anchor, `other` otherwise.
    pub(crate) fn merge(&mut self, other: PendingSuggestions) {
        self.extend(other.start, other.producers);
    }

    pub(crate) fn clear(&mut self, start: usize) {
        self.replace(start, Vec::new());
    }

    /// Materialize the candidates at the recorded anchor.
    pub fn resolve(&self, input: &str) -> Suggestions {
        self.resolve_at(input, self.start)
    }

    /// Materialize the candidates at a caller-supplied anchor.
    ///
    /// Candidates are kept when they start with the text typed since the
    /// anchor, compared case-insensitively, and de-duplicated in order.
    pub fn resolve_at(&self, input: &str, start: usize) -> Suggestions {
        let mut start = start.min(input.len());
        while !input.is_char_boundary(start) {
            start -= 1;
        }
        let context = SuggestionContext { input, start };
        let typed = context.typed().to_lowercase();

        let mut seen = FxHashSet::default();
        let mut items = Vec::new();
        for producer in &self.producers {
            for suggestion in producer(&context) {
                if !suggestion.text.to_lowercase().starts_with(&typed) {
                    continue;
                }
                if seen.insert(suggestion.text.clone()) {
                    items.push(suggestion);
                }
            }
        }

        Suggestions {
            range: text_range(start, input.len()),
            items,
        }
    }
}

/// Materialized completion candidates and the range they replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestions {
    pub range: TextRange,
    pub items: Vec<Suggestion>,
}

impl Default for Suggestions {
    fn default() -> Self {
        Self {
            range: TextRange::empty(text_size(0)),
            items: Vec::new(),
        }
    }
}

impl Suggestions {
    /// Candidate texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item.text == text)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

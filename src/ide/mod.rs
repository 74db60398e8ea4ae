//! IDE features: completion candidates for partially typed commands.
//!
//! Parsers record what may legally follow the cursor while they run; this
//! module holds the types that record and materialize those candidates.

mod completion;

pub use completion::{
    PendingSuggestions, Suggestion, SuggestionContext, SuggestionProducer, Suggestions, literal,
    literals, owned, words,
};

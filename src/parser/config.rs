//! Resource limits applied while parsing.

/// Limits guarding a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Longest input accepted, in bytes
    pub max_input_len: usize,
    /// Deepest nesting of compounds and lists
    pub max_depth: usize,
    /// Upper bound on keyword-argument loop iterations
    pub max_arguments: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: 32_767,
            max_depth: 64,
            max_arguments: 64,
        }
    }
}

impl ParserConfig {
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments;
        self
    }
}

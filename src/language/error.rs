use thiserror::Error;

/// Everything that can go wrong while building, rendering, or compiling a
/// pattern. Construction problems are reported by the call that was given
/// the bad arguments; the circular reference and unbound placeholder cases
/// are only ever discovered when rendering.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid group name '{0}'")]
    InvalidGroupName(String),
    #[error("group numbers start at 1")]
    InvalidGroupNumber,
    #[error("character set must contain at least one item")]
    EmptyCharacterSet,
    #[error("invalid character range '{0}'-'{1}'")]
    InvalidCharacterRange(char, char),
    #[error("invalid quantifier range {{{0},{1}}}")]
    InvalidQuantifierRange(usize, usize),
    #[error("quantifier count must not be negative")]
    NegativeCount,
    #[error("alternation requires at least one alternative")]
    EmptyAlternation,
    #[error("option '{0}' is both applied and disabled")]
    ConflictingOptions(char),
    #[error("placeholder is already bound")]
    PlaceholderAlreadyBound,
    #[error("only a placeholder can be bound")]
    NotAPlaceholder,
    #[error("placeholder was never bound")]
    UnboundPlaceholder,
    #[error("circular reference: expression contains itself")]
    CircularReference,
    #[error("regular expression engine rejected pattern: {0}")]
    Compile(#[from] regex::Error),
}

impl PatternError {
    /// Whether this is the render-time failure raised for a pattern that
    /// (transitively) contains itself, as opposed to a rejected argument.
    pub fn is_circular(&self) -> bool {
        matches!(self, PatternError::CircularReference)
    }
}

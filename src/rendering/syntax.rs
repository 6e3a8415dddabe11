//! Tags describing which construct produced a fragment of output

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Text,
    Character,
    Class,
    Anchor,
    Set,
    Group,
    Assertion,
    Alternation,
    Conditional,
    Quantifier,
    Backreference,
    Options,
    Raw,
}

/// Trait for different rendering backends (the plain one producing the
/// pattern itself, ANSI escapes for showing a pattern on a terminal)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

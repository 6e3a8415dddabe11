//! Pattern nodes and the chain that links them

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::language::*;

mod chain;
mod factory;
mod quantified;

pub use quantified::Quantified;

/// A composable piece of a regular expression.
///
/// A `Pattern` is a handle to the last node of a chain; each node points
/// back at the node before it. Handles are cheap to clone and nodes are
/// never modified once built, so a pattern can be reused anywhere, including
/// several times in the same expression.
#[derive(Clone)]
pub struct Pattern {
    pub(crate) tip: Arc<Node>,
}

pub(crate) struct Node {
    pub(crate) previous: Option<Arc<Node>>,
    pub(crate) body: Arc<Body>,
}

/// What a composite node wraps: either another pattern, or a string payload
/// used as is (or escaped first).
pub(crate) enum Content {
    Pattern(Pattern),
    Raw { text: String, escape: bool },
}

/// The test at the head of a conditional construct.
#[derive(Clone, Debug)]
pub enum Condition {
    /// Whether the referenced group has captured.
    Group(Reference),
    /// Whether the expression matches at this position.
    Expression(Pattern),
}

pub(crate) enum Body {
    Text {
        value: String,
        escape: bool,
        ignore_case: bool,
    },
    Character(char),
    Class(Class),
    Anchor(Anchor),
    CharacterSet {
        negated: bool,
        items: Vec<SetItem>,
    },
    Group {
        kind: GroupKind,
        content: Content,
    },
    Assertion {
        kind: AssertionKind,
        content: Content,
    },
    Alternation(Vec<Pattern>),
    Conditional {
        condition: Condition,
        yes: Pattern,
        no: Option<Pattern>,
    },
    Quantified {
        target: Pattern,
        quantifier: Quantifier,
    },
    Backreference(Reference),
    Options {
        apply: Options,
        disable: Options,
    },
    Raw(String),
    Placeholder(OnceLock<Pattern>),
}

impl Body {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Body::Text { .. } => Kind::Text,
            Body::Character(_) => Kind::Character,
            Body::Class(_) => Kind::Class,
            Body::Anchor(_) => Kind::Anchor,
            Body::CharacterSet { .. } => Kind::CharacterSet,
            Body::Group { .. } => Kind::Group,
            Body::Assertion { .. } => Kind::Assertion,
            Body::Alternation(_) => Kind::Alternation,
            Body::Conditional { .. } => Kind::Conditional,
            Body::Quantified { .. } => Kind::Quantified,
            Body::Backreference(_) => Kind::Backreference,
            Body::Options { .. } => Kind::Options,
            Body::Raw(_) => Kind::Raw,
            Body::Placeholder(_) => Kind::Placeholder,
        }
    }
}

impl Pattern {
    pub(crate) fn from_body(body: Body) -> Pattern {
        Pattern {
            tip: Arc::new(Node {
                previous: None,
                body: Arc::new(body),
            }),
        }
    }

    /// Attach `next` after this pattern. If `next` is itself a chain, it is
    /// attached at its root so its own order is kept: `[x, y]` appended
    /// with `[p, q]` is `[x, y, p, q]`. Neither input is changed.
    pub fn append(&self, next: impl Into<Pattern>) -> Pattern {
        let next = next.into();

        let mut tip = self
            .tip
            .clone();
        for node in next.nodes() {
            tip = Arc::new(Node {
                previous: Some(tip),
                body: node
                    .body
                    .clone(),
            });
        }

        Pattern { tip }
    }

    /// The nodes of this chain, oldest first. The chain is linked
    /// backwards, so walk from the tip to the root and then reverse.
    pub(crate) fn nodes(&self) -> Vec<&Node> {
        let mut stack = Vec::new();
        let mut current = Some(&self.tip);

        while let Some(node) = current {
            stack.push(node.as_ref());
            current = node
                .previous
                .as_ref();
        }

        stack.reverse();
        stack
    }

    pub(crate) fn body(&self) -> &Body {
        &self
            .tip
            .body
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = Some(&self.tip);
        while let Some(node) = current {
            count += 1;
            current = node
                .previous
                .as_ref();
        }
        count
    }

    /// Present for symmetry with [`len`](Pattern::len); a chain always holds
    /// at least one node, so this is never true.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// What the last node of the chain is.
    pub fn kind(&self) -> Kind {
        self.body()
            .kind()
    }

    /// What every node in the chain is, oldest first.
    pub fn kinds(&self) -> Vec<Kind> {
        self.nodes()
            .iter()
            .map(|node| {
                node.body
                    .kind()
            })
            .collect()
    }

    /// Fill in a pattern created with [`Pattern::placeholder`]. This is the
    /// only way to refer to an expression before it exists, and so the
    /// only way to make a pattern that contains itself; such a pattern
    /// fails to render.
    pub fn bind(&self, target: impl Into<Pattern>) -> Result<(), PatternError> {
        match self.body() {
            Body::Placeholder(cell) => cell
                .set(target.into())
                .map_err(|_| PatternError::PlaceholderAlreadyBound),
            _ => Err(PatternError::NotAPlaceholder),
        }
    }
}

// Unlink iteratively so that dropping a long chain does not recurse once
// per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut previous = self
            .previous
            .take();
        while let Some(node) = previous {
            match Arc::try_unwrap(node) {
                Ok(mut node) => {
                    previous = node
                        .previous
                        .take();
                }
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern")
            .field(&self.kinds())
            .finish()
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::text(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::text(text)
    }
}

impl From<char> for Pattern {
    fn from(c: char) -> Self {
        Pattern::char(c)
    }
}

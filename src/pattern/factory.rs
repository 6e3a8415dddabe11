//! Constructors for every kind of node

use std::sync::OnceLock;

use super::{Body, Condition, Content, Pattern};
use crate::language::*;

impl Pattern {
    // literals

    /// Literal text, escaped so that it matches itself.
    pub fn text(value: impl Into<String>) -> Pattern {
        Pattern::from_body(Body::Text {
            value: value.into(),
            escape: true,
            ignore_case: false,
        })
    }

    /// Literal text matched without regard to case.
    pub fn text_ignore_case(value: impl Into<String>) -> Pattern {
        Pattern::from_body(Body::Text {
            value: value.into(),
            escape: true,
            ignore_case: true,
        })
    }

    /// Pattern syntax emitted verbatim, without escaping.
    pub fn raw(syntax: impl Into<String>) -> Pattern {
        Pattern::from_body(Body::Raw(syntax.into()))
    }

    pub fn char(c: char) -> Pattern {
        Pattern::from_body(Body::Character(c))
    }

    // classes

    pub fn class(class: Class) -> Pattern {
        Pattern::from_body(Body::Class(class))
    }

    pub fn any_char() -> Pattern {
        Pattern::class(Class::Any)
    }

    pub fn digit() -> Pattern {
        Pattern::class(Class::Digit)
    }

    pub fn not_digit() -> Pattern {
        Pattern::class(Class::NotDigit)
    }

    pub fn word_char() -> Pattern {
        Pattern::class(Class::WordChar)
    }

    pub fn not_word_char() -> Pattern {
        Pattern::class(Class::NotWordChar)
    }

    pub fn white_space() -> Pattern {
        Pattern::class(Class::WhiteSpace)
    }

    pub fn not_white_space() -> Pattern {
        Pattern::class(Class::NotWhiteSpace)
    }

    // anchors

    pub fn anchor(anchor: Anchor) -> Pattern {
        Pattern::from_body(Body::Anchor(anchor))
    }

    pub fn start_of_line() -> Pattern {
        Pattern::anchor(Anchor::StartOfLine)
    }

    pub fn end_of_line() -> Pattern {
        Pattern::anchor(Anchor::EndOfLine)
    }

    pub fn start_of_input() -> Pattern {
        Pattern::anchor(Anchor::StartOfInput)
    }

    pub fn end_of_input() -> Pattern {
        Pattern::anchor(Anchor::EndOfInput)
    }

    pub fn word_boundary() -> Pattern {
        Pattern::anchor(Anchor::WordBoundary)
    }

    pub fn not_word_boundary() -> Pattern {
        Pattern::anchor(Anchor::NotWordBoundary)
    }

    // character sets

    /// A set matching any one of the given items, e.g. `[a-z_\d]`.
    pub fn set<I>(items: I) -> Result<Pattern, PatternError>
    where
        I: IntoIterator,
        I::Item: Into<SetItem>,
    {
        character_set(false, items)
    }

    /// A set matching any character except the given items, e.g. `[^"]`.
    pub fn not_set<I>(items: I) -> Result<Pattern, PatternError>
    where
        I: IntoIterator,
        I::Item: Into<SetItem>,
    {
        character_set(true, items)
    }

    /// A set over the inclusive range `start`..=`end`.
    pub fn range(start: char, end: char) -> Result<Pattern, PatternError> {
        Pattern::set([SetItem::range(start, end)?])
    }

    // groups

    pub fn group(content: impl Into<Pattern>) -> Pattern {
        grouping(GroupKind::Capturing, content.into())
    }

    /// A capturing group around a string payload; `escape` says whether
    /// the payload is literal text or pattern syntax.
    pub fn group_raw(payload: impl Into<String>, escape: bool) -> Pattern {
        Pattern::from_body(Body::Group {
            kind: GroupKind::Capturing,
            content: Content::Raw {
                text: payload.into(),
                escape,
            },
        })
    }

    pub fn named_group(
        name: impl Into<String>,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError> {
        let name = validate_name(name)?;
        Ok(grouping(GroupKind::Named(name), content.into()))
    }

    pub fn non_capturing(content: impl Into<Pattern>) -> Pattern {
        grouping(GroupKind::NonCapturing, content.into())
    }

    /// A group which, once matched, is never backtracked into.
    pub fn atomic(content: impl Into<Pattern>) -> Pattern {
        grouping(GroupKind::Atomic, content.into())
    }

    /// A balancing group: matches `content`, removes the most recent
    /// capture of `previous`, and if `name` is given captures the text
    /// between the two into it.
    pub fn balancing(
        name: Option<&str>,
        previous: &str,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError> {
        let name = match name {
            Some(name) => Some(validate_name(name)?),
            None => None,
        };
        let previous = validate_name(previous)?;
        Ok(grouping(GroupKind::Balancing { name, previous }, content.into()))
    }

    /// A non-capturing group with inline options switched on or off inside
    /// it, e.g. `(?i-m:...)`.
    pub fn with_options(
        apply: Options,
        disable: Options,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError> {
        Options::check(&apply, &disable)?;
        Ok(grouping(GroupKind::Scoped { apply, disable }, content.into()))
    }

    /// Inline options that apply from this point on, e.g. `(?i)`. With no
    /// options on either side this contributes nothing to the output.
    pub fn options(apply: Options, disable: Options) -> Result<Pattern, PatternError> {
        Options::check(&apply, &disable)?;
        Ok(Pattern::from_body(Body::Options { apply, disable }))
    }

    // assertions

    pub fn lookahead(content: impl Into<Pattern>) -> Pattern {
        assertion(AssertionKind::Lookahead, content.into())
    }

    pub fn not_lookahead(content: impl Into<Pattern>) -> Pattern {
        assertion(AssertionKind::NotLookahead, content.into())
    }

    pub fn lookbehind(content: impl Into<Pattern>) -> Pattern {
        assertion(AssertionKind::Lookbehind, content.into())
    }

    pub fn not_lookbehind(content: impl Into<Pattern>) -> Pattern {
        assertion(AssertionKind::NotLookbehind, content.into())
    }

    /// An assertion around a string payload rather than a pattern.
    pub fn assert_raw(kind: AssertionKind, payload: impl Into<String>, escape: bool) -> Pattern {
        Pattern::from_body(Body::Assertion {
            kind,
            content: Content::Raw {
                text: payload.into(),
                escape,
            },
        })
    }

    // alternation and conditionals

    /// Matches any one of the alternatives, tried in order.
    pub fn any_of<I>(alternatives: I) -> Result<Pattern, PatternError>
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        let alternatives: Vec<Pattern> = alternatives
            .into_iter()
            .map(Into::into)
            .collect();
        if alternatives.is_empty() {
            return Err(PatternError::EmptyAlternation);
        }
        Ok(Pattern::from_body(Body::Alternation(alternatives)))
    }

    pub fn conditional(condition: Condition, yes: impl Into<Pattern>, no: Option<Pattern>) -> Pattern {
        Pattern::from_body(Body::Conditional {
            condition,
            yes: yes.into(),
            no,
        })
    }

    /// `yes` if group `number` has captured, otherwise `no`.
    pub fn if_group(
        number: usize,
        yes: impl Into<Pattern>,
        no: Option<Pattern>,
    ) -> Result<Pattern, PatternError> {
        let reference = Reference::number(number)?;
        Ok(Pattern::conditional(Condition::Group(reference), yes, no))
    }

    /// `yes` if the group called `name` has captured, otherwise `no`.
    pub fn if_named(
        name: impl Into<String>,
        yes: impl Into<Pattern>,
        no: Option<Pattern>,
    ) -> Result<Pattern, PatternError> {
        let reference = Reference::name(name)?;
        Ok(Pattern::conditional(Condition::Group(reference), yes, no))
    }

    /// `yes` if `test` matches at this position, otherwise `no`.
    pub fn if_matches(
        test: impl Into<Pattern>,
        yes: impl Into<Pattern>,
        no: Option<Pattern>,
    ) -> Pattern {
        Pattern::conditional(Condition::Expression(test.into()), yes, no)
    }

    // references

    pub fn backreference(number: usize) -> Result<Pattern, PatternError> {
        Ok(Pattern::from_body(Body::Backreference(Reference::number(
            number,
        )?)))
    }

    pub fn named_backreference(name: impl Into<String>) -> Result<Pattern, PatternError> {
        Ok(Pattern::from_body(Body::Backreference(Reference::name(
            name,
        )?)))
    }

    /// An expression to be supplied later with [`Pattern::bind`].
    pub fn placeholder() -> Pattern {
        Pattern::from_body(Body::Placeholder(OnceLock::new()))
    }
}

fn character_set<I>(negated: bool, items: I) -> Result<Pattern, PatternError>
where
    I: IntoIterator,
    I::Item: Into<SetItem>,
{
    let items: Vec<SetItem> = items
        .into_iter()
        .map(Into::into)
        .collect();
    if items.is_empty() {
        return Err(PatternError::EmptyCharacterSet);
    }
    for item in &items {
        if let SetItem::Range(start, end) = item {
            SetItem::range(*start, *end)?;
        }
    }
    Ok(Pattern::from_body(Body::CharacterSet { negated, items }))
}

fn grouping(kind: GroupKind, content: Pattern) -> Pattern {
    Pattern::from_body(Body::Group {
        kind,
        content: Content::Pattern(content),
    })
}

fn assertion(kind: AssertionKind, content: Pattern) -> Pattern {
    Pattern::from_body(Body::Assertion {
        kind,
        content: Content::Pattern(content),
    })
}

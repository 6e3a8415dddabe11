//! The constructs a pattern is made of

use crate::language::PatternError;

/// Predefined character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Any,
    Digit,
    NotDigit,
    WordChar,
    NotWordChar,
    WhiteSpace,
    NotWhiteSpace,
}

impl Class {
    pub fn syntax(&self) -> &'static str {
        match self {
            Class::Any => ".",
            Class::Digit => "\\d",
            Class::NotDigit => "\\D",
            Class::WordChar => "\\w",
            Class::NotWordChar => "\\W",
            Class::WhiteSpace => "\\s",
            Class::NotWhiteSpace => "\\S",
        }
    }
}

/// Zero-width positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    StartOfLine,
    EndOfLine,
    StartOfInput,
    EndOfInput,
    WordBoundary,
    NotWordBoundary,
}

impl Anchor {
    pub fn syntax(&self) -> &'static str {
        match self {
            Anchor::StartOfLine => "^",
            Anchor::EndOfLine => "$",
            Anchor::StartOfInput => "\\A",
            Anchor::EndOfInput => "\\z",
            Anchor::WordBoundary => "\\b",
            Anchor::NotWordBoundary => "\\B",
        }
    }
}

/// One member of a character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetItem {
    Char(char),
    Range(char, char),
    Class(Class),
}

impl SetItem {
    pub fn range(start: char, end: char) -> Result<SetItem, PatternError> {
        if start > end {
            return Err(PatternError::InvalidCharacterRange(start, end));
        }
        Ok(SetItem::Range(start, end))
    }
}

impl From<char> for SetItem {
    fn from(c: char) -> Self {
        SetItem::Char(c)
    }
}

impl From<Class> for SetItem {
    fn from(class: Class) -> Self {
        SetItem::Class(class)
    }
}

/// Inline options, as toggled by `(?imnsx-imnsx)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub ignore_case: bool,
    pub multi_line: bool,
    pub explicit_capture: bool,
    pub single_line: bool,
    pub ignore_whitespace: bool,
}

impl Options {
    pub const NONE: Options = Options {
        ignore_case: false,
        multi_line: false,
        explicit_capture: false,
        single_line: false,
        ignore_whitespace: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Options::NONE
    }

    fn flags(&self) -> [(char, bool); 5] {
        [
            ('i', self.ignore_case),
            ('m', self.multi_line),
            ('n', self.explicit_capture),
            ('s', self.single_line),
            ('x', self.ignore_whitespace),
        ]
    }

    pub fn letters(&self) -> String {
        self.flags()
            .iter()
            .filter(|(_, on)| *on)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Fails if any option is both applied and disabled.
    pub fn check(apply: &Options, disable: &Options) -> Result<(), PatternError> {
        for ((c, on), (_, off)) in apply
            .flags()
            .iter()
            .zip(disable.flags())
        {
            if *on && off {
                return Err(PatternError::ConflictingOptions(*c));
            }
        }
        Ok(())
    }

    /// The `imnsx-imnsx` text; empty when neither side has anything.
    pub fn toggle(apply: &Options, disable: &Options) -> String {
        let mut result = apply.letters();
        if !disable.is_empty() {
            result.push('-');
            result.push_str(&disable.letters());
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
    Atomic,
    /// `(?<name-previous>...)`; pops the capture stack of `previous`,
    /// optionally pushing the interval onto `name`.
    Balancing {
        name: Option<String>,
        previous: String,
    },
    Scoped {
        apply: Options,
        disable: Options,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    Lookahead,
    NotLookahead,
    Lookbehind,
    NotLookbehind,
}

impl AssertionKind {
    pub fn opening(&self) -> &'static str {
        match self {
            AssertionKind::Lookahead => "(?=",
            AssertionKind::NotLookahead => "(?!",
            AssertionKind::Lookbehind => "(?<=",
            AssertionKind::NotLookbehind => "(?<!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Number(usize),
    Name(String),
}

impl Reference {
    pub fn number(number: usize) -> Result<Reference, PatternError> {
        if number == 0 {
            return Err(PatternError::InvalidGroupNumber);
        }
        Ok(Reference::Number(number))
    }

    pub fn name(name: impl Into<String>) -> Result<Reference, PatternError> {
        Ok(Reference::Name(validate_name(name)?))
    }
}

/// Informational tag describing what a node is, for callers that want to
/// inspect a pattern they have built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Character,
    Class,
    Anchor,
    CharacterSet,
    Group,
    Assertion,
    Alternation,
    Conditional,
    Quantified,
    Backreference,
    Options,
    Raw,
    Placeholder,
}

/// Group names are a letter or underscore followed by letters, digits, or
/// underscores.
pub fn validate_name(name: impl Into<String>) -> Result<String, PatternError> {
    let name = name.into();
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(PatternError::InvalidGroupName(name))
    }
}

//! Options consulted while rendering a pattern

use serde::{Deserialize, Serialize};

/// Delimiters placed around group names in named groups, named
/// backreferences, and balancing groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierBoundary {
    /// `(?<name>...)` and `\k<name>`
    #[default]
    AngleBrackets,
    /// `(?'name'...)` and `\k'name'`
    Apostrophes,
}

impl IdentifierBoundary {
    pub fn open(&self) -> char {
        match self {
            IdentifierBoundary::AngleBrackets => '<',
            IdentifierBoundary::Apostrophes => '\'',
        }
    }

    pub fn close(&self) -> char {
        match self {
            IdentifierBoundary::AngleBrackets => '>',
            IdentifierBoundary::Apostrophes => '\'',
        }
    }
}

/// When to put an empty group after a numbered backreference so that a
/// following digit is not read as part of the group number (`\1` then `0`
/// would otherwise become `\10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackreferenceSeparator {
    Never,
    #[default]
    WhenFollowedByDigit,
    Always,
}

/// How the condition of a conditional construct is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionStyle {
    /// `(?(1)yes|no)`, `(?(name)yes|no)`, `(?(expr)yes|no)`
    #[default]
    GroupReference,
    /// `(?(?=\1)yes|no)`, `(?(?=expr)yes|no)`
    Lookahead,
}

/// Render-time options. Build one (or use the default), adjust it, then
/// hand it to a render call by reference; rendering never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub identifier_boundary: IdentifierBoundary,
    /// Wrap a quantified target that is more than a single atom in a
    /// non-capturing group so the quantifier applies to all of it.
    pub group_quantified: bool,
    pub backreference_separator: BackreferenceSeparator,
    pub condition: ConditionStyle,
    /// Spell out case-insensitive text as `[aA]` classes of each character's
    /// simple case forms instead of scoping it with `(?i:...)`. Characters
    /// without a one-to-one mapping keep a `(?i:...)` scope of their own.
    pub invariant_culture: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            identifier_boundary: IdentifierBoundary::AngleBrackets,
            group_quantified: true,
            backreference_separator: BackreferenceSeparator::WhenFollowedByDigit,
            condition: ConditionStyle::GroupReference,
            invariant_culture: false,
        }
    }
}

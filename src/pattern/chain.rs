//! Chaining forms of the constructors: each builds a node and appends it to
//! the receiver in one call, so `a.then_digit()` is `a.append(Pattern::digit())`.

use super::{Condition, Pattern};
use crate::language::*;

macro_rules! chain {
    ($($name:ident => $factory:ident($($arg:ident: $ty:ty),*);)*) => {
        impl Pattern {
            $(
                pub fn $name(&self, $($arg: $ty),*) -> Pattern {
                    self.append(Pattern::$factory($($arg),*))
                }
            )*
        }
    };
}

macro_rules! chain_fallible {
    ($($name:ident => $factory:ident($($arg:ident: $ty:ty),*);)*) => {
        impl Pattern {
            $(
                pub fn $name(&self, $($arg: $ty),*) -> Result<Pattern, PatternError> {
                    Ok(self.append(Pattern::$factory($($arg),*)?))
                }
            )*
        }
    };
}

chain! {
    then_text => text(value: impl Into<String>);
    then_text_ignore_case => text_ignore_case(value: impl Into<String>);
    then_raw => raw(syntax: impl Into<String>);
    then_char => char(c: char);
    then_class => class(class: Class);
    then_any_char => any_char();
    then_digit => digit();
    then_not_digit => not_digit();
    then_word_char => word_char();
    then_not_word_char => not_word_char();
    then_white_space => white_space();
    then_not_white_space => not_white_space();
    then_anchor => anchor(anchor: Anchor);
    then_start_of_line => start_of_line();
    then_end_of_line => end_of_line();
    then_start_of_input => start_of_input();
    then_end_of_input => end_of_input();
    then_word_boundary => word_boundary();
    then_not_word_boundary => not_word_boundary();
    then_group => group(content: impl Into<Pattern>);
    then_group_raw => group_raw(payload: impl Into<String>, escape: bool);
    then_non_capturing => non_capturing(content: impl Into<Pattern>);
    then_atomic => atomic(content: impl Into<Pattern>);
    then_lookahead => lookahead(content: impl Into<Pattern>);
    then_not_lookahead => not_lookahead(content: impl Into<Pattern>);
    then_lookbehind => lookbehind(content: impl Into<Pattern>);
    then_not_lookbehind => not_lookbehind(content: impl Into<Pattern>);
    then_assert_raw => assert_raw(kind: AssertionKind, payload: impl Into<String>, escape: bool);
    then_conditional => conditional(condition: Condition, yes: impl Into<Pattern>, no: Option<Pattern>);
    then_if_matches => if_matches(test: impl Into<Pattern>, yes: impl Into<Pattern>, no: Option<Pattern>);
}

chain_fallible! {
    then_set => set(items: Vec<SetItem>);
    then_not_set => not_set(items: Vec<SetItem>);
    then_range => range(start: char, end: char);
    then_named_group => named_group(name: impl Into<String>, content: impl Into<Pattern>);
    then_balancing => balancing(name: Option<&str>, previous: &str, content: impl Into<Pattern>);
    then_with_options => with_options(apply: Options, disable: Options, content: impl Into<Pattern>);
    then_options => options(apply: Options, disable: Options);
    then_any_of => any_of(alternatives: Vec<Pattern>);
    then_if_group => if_group(number: usize, yes: impl Into<Pattern>, no: Option<Pattern>);
    then_if_named => if_named(name: impl Into<String>, yes: impl Into<Pattern>, no: Option<Pattern>);
    then_backreference => backreference(number: usize);
    then_named_backreference => named_backreference(name: impl Into<String>);
}

/// Quantified chaining: `a.then_one_or_more(b)` is
/// `a.append(b.one_or_more())`.
impl Pattern {
    pub fn then_optional(&self, content: impl Into<Pattern>) -> Pattern {
        let content: Pattern = content.into();
        self.append(content.optional())
    }

    pub fn then_zero_or_more(&self, content: impl Into<Pattern>) -> Pattern {
        let content: Pattern = content.into();
        self.append(content.zero_or_more())
    }

    pub fn then_one_or_more(&self, content: impl Into<Pattern>) -> Pattern {
        let content: Pattern = content.into();
        self.append(content.one_or_more())
    }

    pub fn then_exactly<N>(
        &self,
        count: N,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError>
    where
        N: TryInto<usize>,
    {
        let content: Pattern = content.into();
        Ok(self.append(content.exactly(count)?))
    }

    pub fn then_at_least<N>(
        &self,
        count: N,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError>
    where
        N: TryInto<usize>,
    {
        let content: Pattern = content.into();
        Ok(self.append(content.at_least(count)?))
    }

    pub fn then_between<N, M>(
        &self,
        min: N,
        max: M,
        content: impl Into<Pattern>,
    ) -> Result<Pattern, PatternError>
    where
        N: TryInto<usize>,
        M: TryInto<usize>,
    {
        let content: Pattern = content.into();
        Ok(self.append(content.between(min, max)?))
    }
}

//! Repetition of a pattern

use std::ops::Deref;

use super::{Body, Pattern};
use crate::language::*;

/// A pattern followed by a quantifier. It behaves as a [`Pattern`] for
/// further chaining; before that, [`Quantified::lazy`] can switch it to
/// matching as few repetitions as possible.
#[derive(Clone, Debug)]
pub struct Quantified {
    target: Pattern,
    quantifier: Quantifier,
    pattern: Pattern,
}

impl Quantified {
    pub(crate) fn new(target: Pattern, quantifier: Quantifier) -> Quantified {
        let pattern = Pattern::from_body(Body::Quantified {
            target: target.clone(),
            quantifier,
        });
        Quantified {
            target,
            quantifier,
            pattern,
        }
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn lazy(self) -> Pattern {
        Quantified::new(self.target, self.quantifier.lazy()).pattern
    }
}

impl Deref for Quantified {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        &self.pattern
    }
}

impl From<Quantified> for Pattern {
    fn from(quantified: Quantified) -> Self {
        quantified.pattern
    }
}

impl Pattern {
    fn quantify(&self, quantifier: Quantifier) -> Quantified {
        Quantified::new(self.clone(), quantifier)
    }

    /// Zero or one time: `?`
    pub fn optional(&self) -> Quantified {
        self.quantify(Quantifier::new(Quantity::Optional))
    }

    /// Any number of times: `*`
    pub fn zero_or_more(&self) -> Quantified {
        self.quantify(Quantifier::new(Quantity::ZeroOrMore))
    }

    /// At least once: `+`
    pub fn one_or_more(&self) -> Quantified {
        self.quantify(Quantifier::new(Quantity::OneOrMore))
    }

    /// Exactly `count` times: `{n}`
    pub fn exactly<N>(&self, count: N) -> Result<Quantified, PatternError>
    where
        N: TryInto<usize>,
    {
        Ok(self.quantify(Quantifier::exactly(count)?))
    }

    /// `count` or more times: `{n,}`
    pub fn at_least<N>(&self, count: N) -> Result<Quantified, PatternError>
    where
        N: TryInto<usize>,
    {
        Ok(self.quantify(Quantifier::at_least(count)?))
    }

    /// From `min` to `max` times inclusive: `{n,m}`
    pub fn between<N, M>(&self, min: N, max: M) -> Result<Quantified, PatternError>
    where
        N: TryInto<usize>,
        M: TryInto<usize>,
    {
        Ok(self.quantify(Quantifier::between(min, max)?))
    }
}

//! Quantifiers and the validation of their counts

use crate::language::PatternError;

/// How many times the quantified expression may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Optional,
    ZeroOrMore,
    OneOrMore,
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub quantity: Quantity,
    pub lazy: bool,
}

impl Quantifier {
    pub fn new(quantity: Quantity) -> Quantifier {
        Quantifier {
            quantity,
            lazy: false,
        }
    }

    pub fn exactly<N>(count: N) -> Result<Quantifier, PatternError>
    where
        N: TryInto<usize>,
    {
        let count = to_count(count)?;
        Ok(Quantifier::new(Quantity::Exactly(count)))
    }

    pub fn at_least<N>(count: N) -> Result<Quantifier, PatternError>
    where
        N: TryInto<usize>,
    {
        let count = to_count(count)?;
        Ok(Quantifier::new(Quantity::AtLeast(count)))
    }

    /// A range from `min` to `max` inclusive. `min == max` is allowed
    /// (including the degenerate zero case) and renders as an exact count.
    pub fn between<N, M>(min: N, max: M) -> Result<Quantifier, PatternError>
    where
        N: TryInto<usize>,
        M: TryInto<usize>,
    {
        let min = to_count(min)?;
        let max = to_count(max)?;
        if max < min {
            return Err(PatternError::InvalidQuantifierRange(min, max));
        }
        Ok(Quantifier::new(Quantity::Between(min, max)))
    }

    pub fn lazy(self) -> Quantifier {
        Quantifier { lazy: true, ..self }
    }

    /// The postfix text of this quantifier, lazy suffix included.
    pub fn symbol(&self) -> String {
        let mut result = match self.quantity {
            Quantity::Optional => "?".to_string(),
            Quantity::ZeroOrMore => "*".to_string(),
            Quantity::OneOrMore => "+".to_string(),
            Quantity::Exactly(n) => format!("{{{}}}", n),
            Quantity::AtLeast(n) => format!("{{{},}}", n),
            Quantity::Between(min, max) if min == max => format!("{{{}}}", min),
            Quantity::Between(min, max) => format!("{{{},{}}}", min, max),
        };
        if self.lazy {
            result.push('?');
        }
        result
    }
}

fn to_count<N>(count: N) -> Result<usize, PatternError>
where
    N: TryInto<usize>,
{
    count
        .try_into()
        .map_err(|_| PatternError::NegativeCount)
}

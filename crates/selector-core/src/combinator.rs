//! Combinators joining two selectors, and parsing of their symbols.

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, map},
};

use crate::error::SelectorError;

/// Relationship between the selectors on either side of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `A B`: B anywhere inside A.
    Descendant,
    /// `A > B`: B is a direct child of A.
    Child,
    /// `A + B`: B immediately follows A.
    AdjacentSibling,
    /// `A ~ B`: B follows A among the same siblings.
    GeneralSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    pub fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
        }
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Parses a combinator symbol: exactly one of `' '`, `>`, `+` or `~`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_combinator)(s)
            .map(|(_, combinator)| combinator)
            .map_err(|_| SelectorError::InvalidCombinator(s.to_string()))
    }
}

impl TryFrom<&str> for Combinator {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Matches a single combinator character.
pub fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(char(' '), |_| Combinator::Descendant),
        map(char('>'), |_| Combinator::Child),
        map(char('+'), |_| Combinator::AdjacentSibling),
        map(char('~'), |_| Combinator::GeneralSibling),
    ))(input)
}

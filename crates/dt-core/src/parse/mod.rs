//! Dice-notation parsing.
//!
//! Two layers, mirroring how user input arrives:
//! - [`parse_roll_command`] / [`parse_char_command`] turn a raw command
//!   argument string into a repeat count and a canonical expression.
//! - [`ParsedExpression`] splits a canonical expression into an ordered
//!   sequence of signed terms (dice pools and flat integers), validating
//!   everything eagerly so a malformed expression never triggers a
//!   partial roll.

pub mod command;
pub mod term;

pub use command::{parse_char_command, parse_roll_command};
pub use term::{DiceTerm, parse_dice_only};

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// The sign attached to a term by the '+' or '-' that preceded it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// Preceded by '+', or by nothing (the implied leading '+').
    #[default]
    Plus,
    /// Preceded by '-'.
    Minus,
}

impl Sign {
    /// The multiplicative factor for this sign: +1 or -1.
    pub fn factor(self) -> i32 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }
}

/// One signed term of a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// A dice pool such as "2d6". The sign is only honored by summed
    /// (damage) evaluation; per-die evaluation rolls and keeps every
    /// pool regardless.
    Dice {
        /// The parsed pool.
        term: DiceTerm,
        /// The sign the pool appeared under.
        sign: Sign,
    },
    /// A flat integer with its sign already applied.
    Flat(i32),
}

/// A dice expression split into an ordered sequence of signed terms.
///
/// Order reflects left-to-right appearance in the input and is preserved
/// for display. Construction validates every term up front; no dice are
/// rolled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpression {
    /// The expression text with whitespace stripped.
    pub expression: String,
    /// The terms, in input order.
    pub terms: Vec<Term>,
}

impl ParsedExpression {
    /// Parse an expression such as "2d6+1d4-3" into signed terms.
    ///
    /// '+' and '-' act as term separators with an implied leading '+';
    /// a repeated sign resets the pending sign rather than toggling it,
    /// and the pending sign reverts to '+' after every consumed term.
    ///
    /// # Errors
    /// Propagates [`parse_dice_only`] errors for dice terms and returns
    /// [`DiceError::InvalidToken`] for anything that is neither a dice
    /// term nor an unsigned integer.
    pub fn parse(expression: &str) -> DiceResult<Self> {
        let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

        let mut terms = Vec::new();
        let mut sign = Sign::Plus;
        let mut token = String::new();

        for ch in stripped.chars() {
            if ch == '+' || ch == '-' {
                if !token.is_empty() {
                    terms.push(Self::classify(&token, sign)?);
                    token.clear();
                }
                sign = if ch == '+' { Sign::Plus } else { Sign::Minus };
            } else {
                token.push(ch);
            }
        }
        if !token.is_empty() {
            terms.push(Self::classify(&token, sign)?);
        }

        Ok(Self {
            expression: stripped,
            terms,
        })
    }

    /// The net flat modifier: the sum of all signed flat integers.
    pub fn flat_modifier(&self) -> i32 {
        self.terms
            .iter()
            .filter_map(|t| match t {
                Term::Flat(v) => Some(*v),
                Term::Dice { .. } => None,
            })
            .sum()
    }

    /// The dice terms in input order, with their signs.
    pub fn dice_terms(&self) -> impl Iterator<Item = (&DiceTerm, Sign)> {
        self.terms.iter().filter_map(|t| match t {
            Term::Dice { term, sign } => Some((term, *sign)),
            Term::Flat(_) => None,
        })
    }

    fn classify(token: &str, sign: Sign) -> DiceResult<Term> {
        if token.to_lowercase().contains('d') {
            let term = parse_dice_only(token)?;
            return Ok(Term::Dice { term, sign });
        }
        let value: i32 = token
            .parse()
            .map_err(|_| DiceError::InvalidToken(token.to_string()))?;
        Ok(Term::Flat(sign.factor() * value))
    }
}

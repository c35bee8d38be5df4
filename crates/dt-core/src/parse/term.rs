//! Single dice-term parsing.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A single parsed dice term such as "2d6": a count of dice and the
/// number of sides on each.
///
/// The original notation (lowercased, whitespace-free) is kept for
/// display. Immutable once parsed; out-of-range counts or sides are a
/// parse error, never a runtime error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTerm {
    /// The notation this term was parsed from, e.g. "2d6".
    pub notation: String,
    /// How many dice to roll (1-100).
    pub count: u32,
    /// Sides per die (1-1000).
    pub sides: u32,
}

impl std::fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation)
    }
}

/// Parse dice notation without a modifier, e.g. "2d6" or "d20".
///
/// Accepts `<count>d<sides>` case-insensitively, with the count
/// defaulting to 1 when omitted.
///
/// # Errors
/// - [`DiceError::InvalidToken`] if the text is not of that shape.
/// - [`DiceError::DiceCountOutOfRange`] if the count is outside 1-100.
/// - [`DiceError::DiceSidesOutOfRange`] if the sides are outside 1-1000.
pub fn parse_dice_only(notation: &str) -> DiceResult<DiceTerm> {
    let lower = notation.trim().to_lowercase();

    let Some((count_str, sides_str)) = lower.split_once('d') else {
        return Err(DiceError::InvalidToken(notation.to_string()));
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(count_str) || sides_str.is_empty() || !all_digits(sides_str) {
        return Err(DiceError::InvalidToken(notation.to_string()));
    }

    // Overflowing parses are out of range by definition.
    let count: u32 = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse()
            .map_err(|_| DiceError::DiceCountOutOfRange(lower.clone()))?
    };
    if !(1..=100).contains(&count) {
        return Err(DiceError::DiceCountOutOfRange(lower.clone()));
    }

    let sides: u32 = sides_str
        .parse()
        .map_err(|_| DiceError::DiceSidesOutOfRange(lower.clone()))?;
    if !(1..=1000).contains(&sides) {
        return Err(DiceError::DiceSidesOutOfRange(lower));
    }

    Ok(DiceTerm {
        notation: lower,
        count,
        sides,
    })
}

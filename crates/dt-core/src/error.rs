//! Error types for the dice engine.

use thiserror::Error;

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur while parsing or rolling dice notation.
///
/// All failures are validation errors raised before any die is rolled;
/// the engine never retries or recovers internally. Messages are written
/// to be shown to the end user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The command argument string has no recognizable shape.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// A term in an expression is neither a dice term nor an integer.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// A dice term asked for fewer than 1 or more than 100 dice.
    #[error("dice count must be 1-100 in '{0}'")]
    DiceCountOutOfRange(String),

    /// A dice term asked for fewer than 1 or more than 1000 sides.
    #[error("dice sides must be 1-1000 in '{0}'")]
    DiceSidesOutOfRange(String),

    /// A repeat count outside 1-20 was requested.
    #[error("repeat count must be 1-20, got '{0}'")]
    RepeatCountOutOfRange(String),

    /// A die with fewer than one side was requested directly.
    #[error("a die needs at least 1 side, got {0}")]
    InvalidSides(u32),
}

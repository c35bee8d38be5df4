//! Dice-notation parser and roll engine for dicetower.
//!
//! Turns free-form tabletop dice text such as "2d6+3", "+5", "10 1d20",
//! or "4d6" into structured, display-ready roll results. The engine is a
//! pure function of input text and a cryptographically secure random
//! source: no state survives a call, and every failure is a typed
//! validation error raised before a single die is rolled.
//!
//! The pieces, in the order user input flows through them:
//! - [`parse`]: command arguments -> repeat count + canonical expression,
//!   and expression -> ordered signed terms.
//! - [`dice`]: the uniform CSPRNG die source.
//! - [`roll`]: per-die and summed evaluation, plus the
//!   advantage/disadvantage selector.
//! - [`stats`]: 4d6-drop-lowest ability scores.
//!
//! Result types render chat-ready markdown through `Display`.

pub mod dice;
pub mod error;
pub mod parse;
pub mod roll;
pub mod stats;

pub use dice::roll_die;
pub use error::{DiceError, DiceResult};
pub use parse::{
    DiceTerm, ParsedExpression, Sign, Term, parse_char_command, parse_dice_only,
    parse_roll_command,
};
pub use roll::{
    AdvantageKind, AdvantageRoll, Chosen, DicePool, DmgComponent, DmgResult, RollResult,
    roll_dice, roll_dice_with, roll_dmg, roll_dmg_with, roll_with_advantage,
    roll_with_advantage_with, roll_with_disadvantage, roll_with_disadvantage_with,
};
pub use stats::{AbilityScore, StatBlock, roll_character_stats, roll_character_stats_with};

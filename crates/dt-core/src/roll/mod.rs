//! Roll evaluation.
//!
//! Two evaluation modes over the same parsed expression:
//! - **Per-die** ([`roll_dice`]): the net flat modifier is added to every
//!   individual die in every pool.
//! - **Summed** ([`roll_dmg`]): each pool is totalled separately and the
//!   signed subtotals plus the modifier make one grand total.
//!
//! Every evaluator validates the whole expression before drawing a
//! single die, so malformed input never produces partial rolls. The
//! `_with` variants take a caller-supplied CSPRNG for deterministic
//! testing; the plain variants draw from the thread-local generator.

pub mod advantage;
pub mod result;

pub use advantage::{
    AdvantageKind, AdvantageRoll, Chosen, roll_with_advantage, roll_with_advantage_with,
    roll_with_disadvantage, roll_with_disadvantage_with,
};
pub use result::{DicePool, DmgComponent, DmgResult, RollResult};

use rand::{CryptoRng, Rng};

use crate::dice::roll_die;
use crate::error::DiceResult;
use crate::parse::{DiceTerm, ParsedExpression};

/// Roll an expression in per-die mode with the given generator.
///
/// # Errors
/// Any parse error from [`ParsedExpression::parse`]; no dice are rolled
/// on failure.
pub fn roll_dice_with<R: Rng + CryptoRng>(rng: &mut R, expression: &str) -> DiceResult<RollResult> {
    let parsed = ParsedExpression::parse(expression)?;
    let modifier = parsed.flat_modifier();

    let mut pools = Vec::new();
    let mut modified = Vec::new();
    for (term, _) in parsed.dice_terms() {
        let rolls = roll_pool(rng, term)?;
        modified.push(rolls.iter().map(|&r| r as i32 + modifier).collect());
        pools.push(DicePool {
            notation: term.notation.clone(),
            sides: term.sides,
            rolls,
        });
    }

    Ok(RollResult {
        expression: parsed.expression,
        pools,
        modifier,
        modified,
    })
}

/// Roll an expression in per-die mode using the thread-local CSPRNG.
///
/// # Errors
/// Any parse error from [`ParsedExpression::parse`].
pub fn roll_dice(expression: &str) -> DiceResult<RollResult> {
    roll_dice_with(&mut rand::rng(), expression)
}

/// Roll an expression in summed (damage) mode with the given generator.
///
/// # Errors
/// Any parse error from [`ParsedExpression::parse`]; no dice are rolled
/// on failure.
pub fn roll_dmg_with<R: Rng + CryptoRng>(rng: &mut R, expression: &str) -> DiceResult<DmgResult> {
    let parsed = ParsedExpression::parse(expression)?;
    let modifier = parsed.flat_modifier();

    let mut components = Vec::new();
    let mut total = modifier;
    for (term, sign) in parsed.dice_terms() {
        let rolls = roll_pool(rng, term)?;
        let subtotal: i32 = rolls.iter().map(|&r| r as i32).sum();
        total += sign.factor() * subtotal;
        components.push(DmgComponent {
            notation: term.notation.clone(),
            rolls,
            subtotal,
        });
    }

    Ok(DmgResult {
        expression: parsed.expression,
        components,
        modifier,
        total,
    })
}

/// Roll an expression in summed mode using the thread-local CSPRNG.
///
/// # Errors
/// Any parse error from [`ParsedExpression::parse`].
pub fn roll_dmg(expression: &str) -> DiceResult<DmgResult> {
    roll_dmg_with(&mut rand::rng(), expression)
}

/// Roll every die of one term, preserving roll order.
fn roll_pool<R: Rng + CryptoRng>(rng: &mut R, term: &DiceTerm) -> DiceResult<Vec<u32>> {
    (0..term.count).map(|_| roll_die(rng, term.sides)).collect()
}

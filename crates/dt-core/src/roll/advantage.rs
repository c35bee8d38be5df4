//! Advantage and disadvantage: roll twice, keep the better or worse total.

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::error::DiceResult;
use crate::roll::result::RollResult;
use crate::roll::roll_dice_with;

/// Whether the higher or the lower of the two totals is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvantageKind {
    /// Keep the higher total.
    Advantage,
    /// Keep the lower total.
    Disadvantage,
}

/// Which of the two independent rolls was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chosen {
    /// The first roll (also the winner on a tie).
    First,
    /// The second roll.
    Second,
}

/// The outcome of rolling an expression twice and selecting one result.
///
/// Both rolls use fresh, independent draws; nothing from the first is
/// reused for the second. The grand total of a roll is the sum of all
/// its modified die values across every pool. Ties favor the first roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvantageRoll {
    /// Whether this was advantage or disadvantage.
    pub kind: AdvantageKind,
    /// The first of the two rolls.
    pub first: RollResult,
    /// The second of the two rolls.
    pub second: RollResult,
    /// Which roll was kept.
    pub chosen: Chosen,
    /// The kept roll's grand total.
    pub total: i32,
}

impl AdvantageRoll {
    /// The roll that was kept.
    pub fn chosen_roll(&self) -> &RollResult {
        match self.chosen {
            Chosen::First => &self.first,
            Chosen::Second => &self.second,
        }
    }
}

impl std::fmt::Display for AdvantageRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.kind {
            AdvantageKind::Advantage => "higher",
            AdvantageKind::Disadvantage => "lower",
        };
        write!(
            f,
            "Roll a: {}\nRoll b: {}\n**Result: {}** ({tag})",
            self.first, self.second, self.total
        )
    }
}

/// Roll twice with the given generator and keep the higher total.
///
/// # Errors
/// Any parse error from the underlying [`roll_dice_with`].
pub fn roll_with_advantage_with<R: Rng + CryptoRng>(
    rng: &mut R,
    expression: &str,
) -> DiceResult<AdvantageRoll> {
    select(rng, expression, AdvantageKind::Advantage)
}

/// Roll twice using the thread-local CSPRNG and keep the higher total.
///
/// # Errors
/// Any parse error from the underlying [`roll_dice_with`].
pub fn roll_with_advantage(expression: &str) -> DiceResult<AdvantageRoll> {
    roll_with_advantage_with(&mut rand::rng(), expression)
}

/// Roll twice with the given generator and keep the lower total.
///
/// # Errors
/// Any parse error from the underlying [`roll_dice_with`].
pub fn roll_with_disadvantage_with<R: Rng + CryptoRng>(
    rng: &mut R,
    expression: &str,
) -> DiceResult<AdvantageRoll> {
    select(rng, expression, AdvantageKind::Disadvantage)
}

/// Roll twice using the thread-local CSPRNG and keep the lower total.
///
/// # Errors
/// Any parse error from the underlying [`roll_dice_with`].
pub fn roll_with_disadvantage(expression: &str) -> DiceResult<AdvantageRoll> {
    roll_with_disadvantage_with(&mut rand::rng(), expression)
}

fn select<R: Rng + CryptoRng>(
    rng: &mut R,
    expression: &str,
    kind: AdvantageKind,
) -> DiceResult<AdvantageRoll> {
    let first = roll_dice_with(rng, expression)?;
    let second = roll_dice_with(rng, expression)?;
    let (a, b) = (first.grand_total(), second.grand_total());

    let keep_first = match kind {
        AdvantageKind::Advantage => a >= b,
        AdvantageKind::Disadvantage => a <= b,
    };
    let chosen = if keep_first { Chosen::First } else { Chosen::Second };
    let total = match kind {
        AdvantageKind::Advantage => a.max(b),
        AdvantageKind::Disadvantage => a.min(b),
    };

    Ok(AdvantageRoll {
        kind,
        first,
        second,
        chosen,
        total,
    })
}

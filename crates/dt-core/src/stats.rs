//! Character ability-score generation: 4d6, drop the lowest, six times.

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::dice::roll_die;
use crate::error::DiceResult;

/// One ability score: four raw d6 values in roll order and the sum of
/// the three highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// The four d6 rolls, pre-sort order preserved.
    pub rolls: [u32; 4],
    /// Sum of the three highest rolls (3-18).
    pub total: u32,
}

impl AbilityScore {
    /// Index of the dropped die: the first occurrence of the minimum.
    pub fn dropped_index(&self) -> usize {
        let min = *self.rolls.iter().min().unwrap_or(&0);
        self.rolls.iter().position(|&r| r == min).unwrap_or(0)
    }
}

/// Six ability scores for one character.
///
/// Generated once per request, never mutated, discarded after display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// The six scores, in generation order.
    pub scores: Vec<AbilityScore>,
}

impl StatBlock {
    /// Sum of all six score totals.
    pub fn grand_total(&self) -> u32 {
        self.scores.iter().map(|s| s.total).sum()
    }
}

impl std::fmt::Display for StatBlock {
    /// One line per score with the dropped die struck through, then a
    /// grand total: `Stat #1: (4, ~~2~~, 6, 3) = **13**`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, score) in self.scores.iter().enumerate() {
            let dropped = score.dropped_index();
            let faces: Vec<String> = score
                .rolls
                .iter()
                .enumerate()
                .map(|(j, &r)| {
                    if j == dropped {
                        format!("~~{r}~~")
                    } else {
                        r.to_string()
                    }
                })
                .collect();
            writeln!(f, "Stat #{}: ({}) = **{}**", i + 1, faces.join(", "), score.total)?;
        }
        write!(f, "\n**Total: {}**", self.grand_total())
    }
}

/// Roll a full stat block with the given generator: six scores of
/// 4d6-drop-lowest.
///
/// # Errors
/// Never fails in practice; the signature carries [`DiceResult`] because
/// the underlying die source does.
pub fn roll_character_stats_with<R: Rng + CryptoRng>(rng: &mut R) -> DiceResult<StatBlock> {
    let mut scores = Vec::with_capacity(6);
    for _ in 0..6 {
        let mut rolls = [0u32; 4];
        for slot in &mut rolls {
            *slot = roll_die(rng, 6)?;
        }
        let total = rolls.iter().sum::<u32>() - rolls.iter().min().copied().unwrap_or(0);
        scores.push(AbilityScore { rolls, total });
    }
    Ok(StatBlock { scores })
}

/// Roll a full stat block using the thread-local CSPRNG.
///
/// # Errors
/// Never fails in practice; see [`roll_character_stats_with`].
pub fn roll_character_stats() -> DiceResult<StatBlock> {
    roll_character_stats_with(&mut rand::rng())
}

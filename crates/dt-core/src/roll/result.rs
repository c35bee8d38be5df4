//! Structured roll results and their chat-markdown rendering.

use serde::{Deserialize, Serialize};

/// The raw rolls produced by one dice term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    /// The notation this pool was rolled from, e.g. "2d6".
    pub notation: String,
    /// Sides per die, kept so the formatter can special-case the d20.
    pub sides: u32,
    /// Raw face values in roll order.
    pub rolls: Vec<u32>,
}

/// Result of a per-die roll: the flat modifier is applied to every
/// individual die across all pools.
///
/// Invariant: `modified[i][j] == pools[i].rolls[j] + modifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The whitespace-free expression that was rolled.
    pub expression: String,
    /// Dice pools in expression order.
    pub pools: Vec<DicePool>,
    /// Net flat modifier summed from the expression's integer terms.
    pub modifier: i32,
    /// Per-pool modified values, parallel to `pools`.
    pub modified: Vec<Vec<i32>>,
}

impl RollResult {
    /// Sum of every modified die value across all pools.
    pub fn grand_total(&self) -> i32 {
        self.modified.iter().flatten().sum()
    }
}

/// Render one die for the modifier-free display path, bolding a natural
/// 20 and marking a natural 1 on a d20.
fn format_face(value: u32, sides: u32) -> String {
    if sides == 20 && value == 20 {
        "**20**".to_string()
    } else if sides == 20 && value == 1 {
        "**Nat1**".to_string()
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for RollResult {
    /// One line per pool. Without a modifier:
    /// `2D6 Result - (3, 5)`. With one, the calculation is shown:
    /// `1D20 Result - (15) = (15+3) = (18)`. On a d20, a 20 is bolded
    /// (modifier still applied) and a 1 becomes `**Nat1**` with the
    /// modifier suppressed in both display paths.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines = Vec::with_capacity(self.pools.len());

        if self.modifier == 0 {
            for pool in &self.pools {
                let faces: Vec<String> = pool
                    .rolls
                    .iter()
                    .map(|&r| format_face(r, pool.sides))
                    .collect();
                lines.push(format!(
                    "{} Result - ({})",
                    pool.notation.to_uppercase(),
                    faces.join(", ")
                ));
            }
        } else {
            let mod_sign = if self.modifier > 0 { "+" } else { "" };
            for (pool, modified) in self.pools.iter().zip(&self.modified) {
                let mut base = Vec::with_capacity(pool.rolls.len());
                let mut calc = Vec::with_capacity(pool.rolls.len());
                let mut result = Vec::with_capacity(pool.rolls.len());

                for (&raw, &shown) in pool.rolls.iter().zip(modified) {
                    if pool.sides == 20 && raw == 20 {
                        base.push("**20**".to_string());
                        calc.push(format!("(**20**{mod_sign}{})", self.modifier));
                        result.push(format!("**{shown}**"));
                    } else if pool.sides == 20 && raw == 1 {
                        base.push("**Nat1**".to_string());
                        calc.push("(**Nat1**)".to_string());
                        result.push("**Nat1**".to_string());
                    } else {
                        base.push(raw.to_string());
                        calc.push(format!("({raw}{mod_sign}{})", self.modifier));
                        result.push(shown.to_string());
                    }
                }

                lines.push(format!(
                    "{} Result - ({}) = {} = ({})",
                    pool.notation.to_uppercase(),
                    base.join(", "),
                    calc.join(" "),
                    result.join(", ")
                ));
            }
        }

        write!(f, "{}", lines.join("\n"))
    }
}

/// One summed component of a damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmgComponent {
    /// The notation this component was rolled from.
    pub notation: String,
    /// Raw face values in roll order.
    pub rolls: Vec<u32>,
    /// Sum of the raw rolls.
    pub subtotal: i32,
}

/// Result of a summed (damage) roll: each pool is totalled separately,
/// then signed subtotals and the flat modifier are accumulated.
///
/// Invariant: `total` equals the signed sum of subtotals plus `modifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmgResult {
    /// The whitespace-free expression that was rolled.
    pub expression: String,
    /// Summed components in expression order.
    pub components: Vec<DmgComponent>,
    /// Net flat modifier summed from the expression's integer terms.
    pub modifier: i32,
    /// Grand total of signed subtotals and the modifier.
    pub total: i32,
}

impl std::fmt::Display for DmgResult {
    /// `(3, 4) + (2, 6) + [+4] = 19`; the modifier bracket is omitted
    /// when zero. Sums are opaque: no nat-20/nat-1 styling here.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = self
            .components
            .iter()
            .map(|c| {
                let rolls: Vec<String> = c.rolls.iter().map(u32::to_string).collect();
                format!("({})", rolls.join(", "))
            })
            .collect();

        if self.modifier != 0 {
            parts.push(format!("[{:+}]", self.modifier));
        }

        write!(f, "{} = {}", parts.join(" + "), self.total)
    }
}

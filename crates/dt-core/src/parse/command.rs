//! Command-argument parsing with smart defaults.
//!
//! Turns the free-form text after a roll command into a repeat count and
//! a canonical dice expression. Empty input defaults to a single "1d20"
//! (the permissive variant; the engine never demands explicit notation).
//!
//! ```text
//! ""  or "d20"   -> (1, "1d20")
//! "+3" or "+ 3"  -> (1, "1d20+3")
//! "10"           -> (10, "1d20")
//! "10 +2"        -> (10, "1d20+2")
//! "2d6+3"        -> (1, "2d6+3")
//! "5 2d6+3"      -> (5, "2d6+3")
//! ```

use crate::error::{DiceError, DiceResult};

/// Parse a roll command's argument string into `(repeat_count, expression)`.
///
/// # Errors
/// - [`DiceError::RepeatCountOutOfRange`] if a leading repeat count is
///   outside 1-20.
/// - [`DiceError::InvalidNotation`] for anything else the shapes above
///   don't cover, including a modifier placed before the dice ("+3 2d6").
pub fn parse_roll_command(args: &str) -> DiceResult<(u32, String)> {
    let args = args.trim();

    if args.is_empty() {
        return Ok((1, "1d20".to_string()));
    }

    let normalized: String = args.chars().filter(|c| !c.is_whitespace()).collect();

    // Just a modifier: "+3" or "- 5" -> 1d20 with that modifier.
    if is_signed_integer(&normalized) {
        return Ok((1, format!("1d20{normalized}")));
    }

    // A sign, digits, then more. Dice after a modifier is backwards.
    if let Some(rest) = strip_signed_integer_prefix(args) {
        if rest.to_lowercase().contains('d') {
            return Err(DiceError::InvalidNotation(
                "put dice notation before the modifier, e.g. 2d6+3".to_string(),
            ));
        }
    }

    let mut tokens = args.split_whitespace();
    let first = tokens.next().unwrap_or_default();

    // Leading bare integer: a repeat count for 1d20 or for what follows.
    if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        let repeat: u32 = first
            .parse()
            .map_err(|_| DiceError::RepeatCountOutOfRange(first.to_string()))?;
        if !(1..=20).contains(&repeat) {
            return Err(DiceError::RepeatCountOutOfRange(first.to_string()));
        }

        let rest: String = tokens.collect::<Vec<_>>().concat();
        if rest.is_empty() {
            return Ok((repeat, "1d20".to_string()));
        }
        if is_signed_integer(&rest) {
            return Ok((repeat, format!("1d20{rest}")));
        }
        if rest.to_lowercase().contains('d') {
            return Ok((repeat, rest.to_lowercase()));
        }
        return Err(DiceError::InvalidNotation(rest));
    }

    // Dice notation, possibly with a bare "d20" needing its implicit 1.
    if first.to_lowercase().contains('d') {
        return Ok((1, insert_implicit_counts(&normalized)));
    }

    Err(DiceError::InvalidNotation(args.to_string()))
}

/// Parse a character-stats command argument: a repeat count in 1-20,
/// defaulting to 1 when empty.
///
/// # Errors
/// - [`DiceError::InvalidNotation`] if the text is not an integer.
/// - [`DiceError::RepeatCountOutOfRange`] if it is outside 1-20.
pub fn parse_char_command(args: &str) -> DiceResult<u32> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(1);
    }
    let count: i64 = args
        .parse()
        .map_err(|_| DiceError::InvalidNotation(args.to_string()))?;
    if !(1..=20).contains(&count) {
        return Err(DiceError::RepeatCountOutOfRange(args.to_string()));
    }
    Ok(count as u32)
}

/// True for a '+' or '-' followed by one or more digits and nothing else.
fn is_signed_integer(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(['+', '-']) else {
        return false;
    };
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}

/// If `s` starts with a sign, optional whitespace, and at least one
/// digit, return everything after the digits.
fn strip_signed_integer_prefix(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(['+', '-'])?.trim_start();
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    Some(&rest[digits..])
}

/// Lowercase the expression and insert an implicit count of 1 before any
/// 'd' not already preceded by a digit, so "d20+d4" becomes "1d20+1d4".
fn insert_implicit_counts(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 2);
    let mut prev: Option<char> = None;
    for ch in expression.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch == 'd' && !prev.is_some_and(|p| p.is_ascii_digit()) {
            out.push('1');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_defaults_to_one_d20() {
        assert_eq!(parse_roll_command("").unwrap(), (1, "1d20".to_string()));
        assert_eq!(parse_roll_command("   ").unwrap(), (1, "1d20".to_string()));
    }

    #[test]
    fn bare_modifier_targets_d20() {
        assert_eq!(parse_roll_command("+3").unwrap(), (1, "1d20+3".to_string()));
        assert_eq!(parse_roll_command("-5").unwrap(), (1, "1d20-5".to_string()));
        assert_eq!(parse_roll_command("+ 3").unwrap(), (1, "1d20+3".to_string()));
    }

    #[test]
    fn bare_repeat_count() {
        assert_eq!(parse_roll_command("10").unwrap(), (10, "1d20".to_string()));
        assert_eq!(parse_roll_command("1").unwrap(), (1, "1d20".to_string()));
    }

    #[test]
    fn repeat_count_with_modifier() {
        assert_eq!(
            parse_roll_command("10 +2").unwrap(),
            (10, "1d20+2".to_string())
        );
    }

    #[test]
    fn repeat_count_with_expression() {
        assert_eq!(
            parse_roll_command("5 2d6+3").unwrap(),
            (5, "2d6+3".to_string())
        );
        assert_eq!(
            parse_roll_command("3 2d6 + 1d4").unwrap(),
            (3, "2d6+1d4".to_string())
        );
    }

    #[test]
    fn repeat_count_out_of_range() {
        for bad in ["0", "21", "0 2d6", "99"] {
            assert!(
                matches!(
                    parse_roll_command(bad),
                    Err(DiceError::RepeatCountOutOfRange(_))
                ),
                "expected RepeatCountOutOfRange for {bad:?}"
            );
        }
    }

    #[test]
    fn plain_expression() {
        assert_eq!(
            parse_roll_command("2d6+3").unwrap(),
            (1, "2d6+3".to_string())
        );
    }

    #[test]
    fn bare_d20_gets_implicit_count() {
        assert_eq!(parse_roll_command("d20").unwrap(), (1, "1d20".to_string()));
        assert_eq!(
            parse_roll_command("d20+d4").unwrap(),
            (1, "1d20+1d4".to_string())
        );
        assert_eq!(
            parse_roll_command("2d6+d8").unwrap(),
            (1, "2d6+1d8".to_string())
        );
    }

    #[test]
    fn uppercase_is_normalized() {
        assert_eq!(
            parse_roll_command("2D6+3").unwrap(),
            (1, "2d6+3".to_string())
        );
    }

    #[test]
    fn modifier_before_dice_is_rejected() {
        assert!(matches!(
            parse_roll_command("+3 2d6"),
            Err(DiceError::InvalidNotation(_))
        ));
    }

    #[test]
    fn nonsense_is_rejected() {
        for bad in ["hello", "5 banana", "1 2 3"] {
            assert!(
                matches!(parse_roll_command(bad), Err(DiceError::InvalidNotation(_))),
                "expected InvalidNotation for {bad:?}"
            );
        }
    }

    #[test]
    fn char_command_defaults_to_one() {
        assert_eq!(parse_char_command("").unwrap(), 1);
        assert_eq!(parse_char_command("  ").unwrap(), 1);
    }

    #[test]
    fn char_command_accepts_range() {
        assert_eq!(parse_char_command("3").unwrap(), 3);
        assert_eq!(parse_char_command(" 20 ").unwrap(), 20);
    }

    #[test]
    fn char_command_rejects_out_of_range() {
        for bad in ["0", "21", "-1"] {
            assert!(
                matches!(
                    parse_char_command(bad),
                    Err(DiceError::RepeatCountOutOfRange(_))
                ),
                "expected RepeatCountOutOfRange for {bad:?}"
            );
        }
    }

    #[test]
    fn char_command_rejects_non_integers() {
        assert!(matches!(
            parse_char_command("abc"),
            Err(DiceError::InvalidNotation(_))
        ));
    }
}

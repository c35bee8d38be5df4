//! The `roll` subcommand: per-die modifier rolls.

use dt_core::{parse_roll_command, roll_dice};

use crate::output::print_report;

/// Parse the arguments, roll the requested number of times, and print.
pub fn run(args: &str, json: bool) -> Result<(), String> {
    let (repeat, expression) = parse_roll_command(args).map_err(|e| e.to_string())?;

    let mut results = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        results.push(roll_dice(&expression).map_err(|e| e.to_string())?);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    let lines: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            if repeat == 1 {
                format!("**Result:** {result}")
            } else {
                format!("**Roll #{}:**\n{result}", i + 1)
            }
        })
        .collect();

    let title = format!(
        "Rolling {}{}",
        expression.to_uppercase(),
        super::repeat_suffix(repeat)
    );
    print_report(&title, &lines);
    Ok(())
}

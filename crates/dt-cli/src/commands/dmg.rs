//! The `dmg` subcommand: summed damage rolls.

use dt_core::{parse_roll_command, roll_dmg};

use crate::output::print_report;

/// Parse the arguments, roll damage the requested number of times, and
/// print, with a grand total across repeats.
pub fn run(args: &str, json: bool) -> Result<(), String> {
    let (repeat, expression) = parse_roll_command(args).map_err(|e| e.to_string())?;

    let mut results = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        results.push(roll_dmg(&expression).map_err(|e| e.to_string())?);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    let grand_total: i32 = results.iter().map(|r| r.total).sum();
    let mut lines: Vec<String> = results
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
    if repeat > 1 {
        lines.push(format!("\n**Total Damage: {grand_total}**"));
    }

    let title = format!(
        "Damage: {}{}",
        expression.to_uppercase(),
        super::repeat_suffix(repeat)
    );
    print_report(&title, &lines);
    Ok(())
}

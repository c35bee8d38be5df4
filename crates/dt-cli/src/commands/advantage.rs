//! The `adv` and `dis` subcommands: roll twice, keep one.

use dt_core::{
    AdvantageKind, parse_roll_command, roll_with_advantage, roll_with_disadvantage,
};

use crate::output::print_report;

/// Parse the arguments, roll with advantage or disadvantage the
/// requested number of times, and print.
pub fn run(args: &str, kind: AdvantageKind, json: bool) -> Result<(), String> {
    let (repeat, expression) = parse_roll_command(args).map_err(|e| e.to_string())?;

    let mut results = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        let result = match kind {
            AdvantageKind::Advantage => roll_with_advantage(&expression),
            AdvantageKind::Disadvantage => roll_with_disadvantage(&expression),
        };
        results.push(result.map_err(|e| e.to_string())?);
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
                result.to_string()
            } else {
                format!(
                    "**Roll #{}:** {} | {} → {}",
                    i + 1,
                    result.first,
                    result.second,
                    result.total
                )
            }
        })
        .collect();

    let label = match kind {
        AdvantageKind::Advantage => "Advantage",
        AdvantageKind::Disadvantage => "Disadvantage",
    };
    let title = format!(
        "{label}: {}{}",
        expression.to_uppercase(),
        super::repeat_suffix(repeat)
    );
    print_report(&title, &lines);
    Ok(())
}

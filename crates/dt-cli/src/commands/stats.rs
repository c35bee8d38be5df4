//! The `char` subcommand: 4d6-drop-lowest ability scores.

use dt_core::{parse_char_command, roll_character_stats};

use crate::output::print_report;

/// Parse the count, roll that many stat blocks, and print.
pub fn run(args: &str, json: bool) -> Result<(), String> {
    let count = parse_char_command(args).map_err(|e| e.to_string())?;

    let mut blocks = Vec::with_capacity(count as usize);
    for _ in 0..count {
        blocks.push(roll_character_stats().map_err(|e| e.to_string())?);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&blocks).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    let lines: Vec<String> = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            if count > 1 {
                format!("__Character #{}__\n{block}", i + 1)
            } else {
                block.to_string()
            }
        })
        .collect();

    let title = format!(
        "Character Stats (4d6 Drop Lowest){}",
        super::repeat_suffix(count)
    );
    print_report(&title, &lines);
    Ok(())
}

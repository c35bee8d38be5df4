//! Terminal output helpers: titles and display-field chunking.

use colored::Colorize;

/// Character budget per display field, with margin under the 1024-char
/// limit chat embeds impose.
pub const FIELD_BUDGET: usize = 1020;

/// Greedily pack result lines into chunks of at most `budget` characters
/// (counting one newline per line). A single oversized line still gets a
/// chunk of its own rather than being split.
pub fn chunk_lines(lines: &[String], budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut length = 0;

    for line in lines {
        let line_length = line.len() + 1;
        if length + line_length > budget && !current.is_empty() {
            chunks.push(current.join("\n"));
            current = vec![line.as_str()];
            length = line_length;
        } else {
            current.push(line);
            length += line_length;
        }
    }
    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

/// Print a titled report: the label leads the first chunk only, and
/// chunks are separated by blank lines.
pub fn print_report(title: &str, lines: &[String]) {
    println!("{}", title.bold());
    for (i, chunk) in chunk_lines(lines, FIELD_BUDGET).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{chunk}");
    }
}

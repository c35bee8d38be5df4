//! CLI frontend for the dicetower dice roller.

mod commands;
mod output;

use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use dt_core::AdvantageKind;

#[derive(Parser)]
#[command(
    name = "dicetower",
    about = "dicetower — a tabletop dice-notation roller",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice with the modifier applied to each die (default: 1d20)
    Roll {
        /// Dice notation, e.g. "2d6+3", "+5", "10", or "5 2d6+3"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print structured results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Roll damage: sum each pool, then add the modifier once
    Dmg {
        /// Dice notation, e.g. "1d12+2d6+5"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print structured results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Roll twice and keep the higher total (default: 1d20)
    Adv {
        /// Dice notation, e.g. "+5" for advantage on 1d20+5
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print structured results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Roll twice and keep the lower total (default: 1d20)
    Dis {
        /// Dice notation, e.g. "+5" for disadvantage on 1d20+5
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Print structured results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Roll character stats: 4d6 drop lowest, six times
    Char {
        /// How many stat blocks to roll (1-20, default 1)
        count: Option<String>,

        /// Print structured results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { args, json } => commands::roll::run(&args.join(" "), json),
        Commands::Dmg { args, json } => commands::dmg::run(&args.join(" "), json),
        Commands::Adv { args, json } => {
            commands::advantage::run(&args.join(" "), AdvantageKind::Advantage, json)
        }
        Commands::Dis { args, json } => {
            commands::advantage::run(&args.join(" "), AdvantageKind::Disadvantage, json)
        }
        Commands::Char { count, json } => {
            commands::stats::run(count.as_deref().unwrap_or(""), json)
        }
    };

    if let Err(message) = result {
        eprintln!("{} {message}", "error:".red().bold());
        process::exit(1);
    }
}

//! Subcommand implementations: thin glue from parsed arguments to the
//! engine, mirroring the chat commands the engine was built for.

pub mod advantage;
pub mod dmg;
pub mod roll;
pub mod stats;

/// Title suffix for repeated rolls: " x5" when rolling five times.
fn repeat_suffix(repeat: u32) -> String {
    if repeat > 1 {
        format!(" x{repeat}")
    } else {
        String::new()
    }
}

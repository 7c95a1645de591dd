//! Terminal output. Stdout carries only the resulting version; everything
//! else goes to stderr.

use console::style;
use tracing::debug;

use crate::cli::orchestration::Outcome;

pub const USAGE: &str = "Usage: semver <kind>\nKind can be one of major,minor,patch,current";

/// Print the resulting version on its own line
pub fn display_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Next { latest, next } => debug!(%latest, %next, "bumped version"),
        Outcome::Current(version) => debug!(%version, "reporting current version"),
        Outcome::Seed(version) => debug!(%version, "reporting seed version"),
    }
    println!("{}", outcome);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print the short usage text, followed by clap's option help if given.
pub fn display_usage(options_help: Option<&str>) {
    eprintln!("{}", USAGE);
    if let Some(help) = options_help {
        eprintln!("\n{}", help.trim_end());
    }
}

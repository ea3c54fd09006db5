//! Human-facing reporting, kept on stderr so stdout stays parseable

use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").cyan(), message);
}

pub fn display_version_summary(version: &str, tag: &str) {
    eprintln!(
        "{} Version is {}",
        style("✓").green(),
        style(version).bold()
    );
    eprintln!("{} Tag is {}", style("✓").green(), style(tag).bold());
}

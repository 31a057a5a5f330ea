use colored::Colorize;

/// Prints a section header preceded by a blank line, matching the step's
/// log layout in CI output.
pub fn section(message: &str) {
    println!();
    println!("{}", message.bright_blue().bold());
}

pub fn detail(message: &str) {
    println!("{message}");
}

pub fn done(message: &str) {
    println!("{}", message.bright_green());
}

pub fn warn(message: &str) {
    println!("{}", message.bright_yellow());
}

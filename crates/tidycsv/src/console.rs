//! Console presentation: colored section banners, status lines, and the
//! one-shot interactive prompt.

use colored::Colorize;
use std::io::{self, Write};

/// Width of section rules and centered banner titles.
const RULE_WIDTH: usize = 70;

/// Print a horizontal rule.
pub fn rule() {
    println!("{}", "─".repeat(RULE_WIDTH).cyan());
}

/// Print a section banner: rule, centered bold title, rule.
pub fn banner(title: &str) {
    rule();
    println!("{}", format!("{:^width$}", title, width = RULE_WIDTH).blue().bold());
    rule();
}

/// Print a success line.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning line. Warnings never abort the run.
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an informational line.
pub fn note(message: &str) {
    println!("{}", message.cyan());
}

/// Print a highlighted count line.
pub fn metric(message: &str) {
    println!("{}", message.yellow());
}

/// Show `prompt` and read exactly one line from stdin.
///
/// Blocks until input arrives. The raw line is returned for the caller to
/// interpret; the choice is read exactly once with no retry loop.
pub fn prompt_choice(prompt: &str) -> io::Result<String> {
    print!("{} ", prompt.cyan());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

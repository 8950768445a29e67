//! Shared CLI output helpers for consistent user-facing text.

use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::db::executor::ResultSet;

const RULE_WIDTH: usize = 56;

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""];

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("{} {message}", "⚠".yellow());
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red());
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Emphasize an inline value.
pub fn highlight(value: impl Display) -> String {
    format!("{}", value.to_string().cyan())
}

/// Start a spinner, hidden when stdout is not a terminal.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if !std::io::stdout().is_terminal() {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .tick_strings(BRAILLE_SPINNER)
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success mark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "×".red(), message));
}

/// Print a generated SQL statement, indented.
pub fn sql(statement: &str) {
    for line in statement.lines() {
        println!("  {}", line.cyan());
    }
}

/// Render a result set as an indented table.
pub fn result_table(result: &ResultSet) {
    if result.rows.is_empty() {
        note("(no rows)");
        return;
    }

    let mut builder = tabled::builder::Builder::default();
    builder.push_record(result.columns.iter().cloned());
    for row in &result.rows {
        builder.push_record(row.iter().cloned());
    }

    let table = builder.build().to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    let rows = result.rows.len();
    note(&format!(
        "{} row{}",
        rows,
        if rows == 1 { "" } else { "s" }
    ));
    if result.truncated {
        warn("output truncated at the configured row cap");
    }
}

/// Report a write statement's effect.
pub fn affected(rows: usize) {
    ok(&format!(
        "{} row{} affected",
        rows,
        if rows == 1 { "" } else { "s" }
    ));
}

//! Shared CLI output helpers for the PamScan binaries.

use std::time::Instant;

use colored::Colorize;

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!("{} {}", "PamScan".bold().green(), subtitle.dimmed());
    eprintln!();
}

pub fn section(title: &str) {
    eprintln!("{}", title.bold().blue());
}

pub fn kv(key: &str, value: &str) {
    eprintln!("  {:<18} {}", key.dimmed(), value);
}

pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

pub fn print_summary(start: Instant) {
    eprintln!();
    eprintln!(
        "{} {}",
        "Elapsed".dimmed(),
        format!("{:.1?}", start.elapsed()).bold()
    );
    eprintln!();
}

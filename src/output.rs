use colored::*;
use std::path::Path;

/// Print application header
pub fn print_header() {
    println!();
    println!("{}", "  DOIO Layout Viewer Bundler".bright_cyan().bold());
    println!("{}", "━".repeat(50).dimmed());
    println!();
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".bright_blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".bright_yellow().bold(), message.bright_yellow());
}

/// Echo the full packaging command before running it
pub fn print_command(program: &str, args: &[String]) {
    println!("{}", "Starting build...".bright_white().bold());
    println!("  {} {} {}", "$".dimmed(), program, args.join(" ").dimmed());
    println!();
}

/// Print success banner with the expected artifact location
pub fn print_success(artifact: &Path) {
    println!();
    println!("{}", "━".repeat(50).dimmed());
    println!(
        "{} {}",
        "✓".bright_green().bold(),
        "Build complete!".bright_green().bold()
    );
    println!();
    println!(
        "  {} {}",
        "Output:".dimmed(),
        artifact.display().to_string().bright_cyan()
    );
    println!();
}

/// Print failure banner with the underlying error detail
pub fn print_failure(error: &crate::error::BundlerError) {
    eprintln!();
    eprintln!(
        "{} {} {}",
        "✗".bright_red().bold(),
        "Build failed:".bright_red().bold(),
        error.to_string().bright_red()
    );
    eprintln!();
}

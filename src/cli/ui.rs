use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use textwrap::wrap;

use buildreg::{ ErrorSeverity, Invocation, RecoverableError, TxOutcome };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4).max(20)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Progress bar over the steps of a script
pub fn create_progress_bar(length: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}"
    ) {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// One line per applied step, colored by outcome
pub fn format_outcome(step: usize, invocation: &Invocation, outcome: &TxOutcome) -> String {
    let call = format!(
        "#{:<3} {}.{} as {}",
        step,
        invocation.registry,
        invocation.operation,
        invocation.sender
    );
    let result = match outcome {
        TxOutcome::Success(_) => format!("✓ {}", outcome).green(),
        TxOutcome::Failure(_) => format!("✗ {}", outcome).red(),
    };
    format!("{} {}", call.bold(), result)
}

/// Report an error with its severity and, when there is one, the suggested fix
pub fn print_recoverable<E: RecoverableError + std::fmt::Display>(err: &E) {
    match err.severity() {
        ErrorSeverity::Error => print_error(&err.to_string()),
        ErrorSeverity::Warning => print_warning(&err.to_string()),
    }
    if let Some(hint) = err.recovery_strategy() {
        print_text(&format!("  hint: {}", hint));
    }
}

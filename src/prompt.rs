use std::io::{self, BufRead, Write};

use crate::output::{CYAN, GRAY, RESET, YELLOW};

/// Ask a yes/no question and return the user's choice
pub fn confirm(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{CYAN}?{RESET} {} {GRAY}{}{RESET} ", question, hint);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        "" => default,
        _ => default,
    }
}

/// Ask for a single line of input, falling back to a default on empty input
pub fn input(question: &str, default: &str) -> String {
    print!("{CYAN}?{RESET} {} {GRAY}[{}]{RESET} ", question, default);
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return default.to_string();
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ask for a single line of input with no default and no re-prompt
///
/// The caller decides what an empty answer means.
pub fn input_line(question: &str) -> String {
    print!("{CYAN}?{RESET} {} ", question);
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }

    line.trim().to_string()
}

/// Ask for a single line of input that may be left empty
pub fn input_optional(question: &str) -> String {
    print!("{CYAN}?{RESET} {} {GRAY}(optional){RESET} ", question);
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }

    line.trim().to_string()
}

/// Ask for a single line of input, re-prompting until it is non-empty
///
/// Returns an empty string only when stdin is exhausted (EOF), since
/// re-prompting is pointless then; callers treat that as an abort.
pub fn input_required(question: &str) -> String {
    loop {
        print!("{CYAN}?{RESET} {} ", question);
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return String::new(),
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            println!("{YELLOW}A value is required{RESET}");
            continue;
        }
        return trimmed.to_string();
    }
}

/// Read free-form multi-line input until end-of-input (Ctrl-D)
///
/// Returns the collected text with trailing whitespace trimmed; an
/// immediate EOF yields an empty string.
pub fn read_multiline(question: &str) -> String {
    println!(
        "{CYAN}?{RESET} {} {GRAY}(finish with Ctrl-D, leave empty to skip){RESET}",
        question
    );
    io::stdout().flush().unwrap();

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(l) => lines.push(l),
            Err(_) => break,
        }
    }

    lines.join("\n").trim_end().to_string()
}

/// Split comma-separated user input into trimmed, non-empty entries
pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

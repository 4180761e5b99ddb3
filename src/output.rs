//! Terminal output helpers.
//!
//! All user-facing styling lives here: ANSI color constants plus the
//! `print_*` functions used across the workflow. Errors and warnings go
//! to stderr; everything else goes to stdout.

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

pub fn print_header() {
    println!("{CYAN}{BOLD}");
    println!("+---------------------------------------------------------+");
    println!(
        "|  mkpr v{}                                              |",
        env!("CARGO_PKG_VERSION")
    );
    println!("+---------------------------------------------------------+");
    println!("{RESET}");
}

/// Print info about what will happen next
pub fn print_action(msg: &str) {
    println!("{CYAN}→{RESET} {}", msg);
}

/// Print a completed step
pub fn print_success(msg: &str) {
    println!("{GREEN}✓{RESET} {}", msg);
}

/// Print a step that was skipped (nothing to do)
pub fn print_skip(msg: &str) {
    println!("{GRAY}-{RESET} {}", msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}Warning:{RESET} {}", msg);
}

/// Print a dimmed follow-up hint
pub fn print_hint(msg: &str) {
    println!("{DIM}{}{RESET}", msg);
}

//! mkpr CLI entry point.
//!
//! The tool takes no workflow flags: running `mkpr` starts the
//! interactive PR creation flow in the current directory.

use clap::Parser;
use mkpr::commands::create_command;
use mkpr::output::print_error;

#[derive(Parser)]
#[command(name = "mkpr")]
#[command(
    version,
    about = "Create a GitHub pull request from the current branch",
    after_help = "WORKFLOW:
    mkpr commits outstanding changes (prompting for a message), pushes
    the branch if needed, asks for PR metadata (base branch, title,
    description, reviewers, labels, draft), then runs `gh pr create`.

REQUIREMENTS:
    git and the GitHub CLI (gh) must be installed, and gh must be
    authenticated (`gh auth login`)."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = create_command() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

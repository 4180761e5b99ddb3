//! Default command: turn the current branch into a pull request.
//!
//! # Workflow
//!
//! 1. Preflight: git and gh installed, gh authenticated, inside a repo.
//! 2. Resolve the current branch; refuse detached HEAD and main/master.
//! 3. Commit outstanding changes (message prompted, empty aborts).
//! 4. Push the branch if it is ahead or has no tracking branch.
//! 5. Stop early (successfully) when an open PR already exists.
//! 6. Collect PR metadata at the prompts.
//! 7. Run `gh pr create` and report the URL.
//!
//! Every failure prints a marked message to stderr and exits non-zero;
//! completed steps are not rolled back.

use crate::config::{self, Config};
use crate::error::{MkprError, Result};
use crate::gh::{self, PrMetadata, PrResult};
use crate::git::{self, PushOutcome};
use crate::output::{
    print_action, print_header, print_hint, print_skip, print_success, CYAN, GRAY, RESET, YELLOW,
};
use crate::progress::Spinner;
use crate::prompt;

/// Default command when running `mkpr` with no arguments.
pub fn create_command() -> Result<()> {
    print_header();

    let config = config::load_config()?;

    preflight()?;
    let branch = resolve_branch()?;
    println!("On branch {CYAN}{}{RESET}", branch);
    println!();

    commit_outstanding_changes()?;
    sync_with_remote(&config.remote, &branch)?;

    if gh::pr_exists_for_branch(&branch)? {
        let existing = match gh::get_existing_pr_url(&branch)? {
            Some(url) => url,
            None => format!("an open PR for {}", branch),
        };
        report(&PrResult::AlreadyExists(existing));
        return Ok(());
    }

    println!();
    let meta = collect_metadata(&config, &branch)?;

    let spinner = Spinner::new("Creating pull request...");
    let created = gh::create_pull_request(&branch, &meta);
    spinner.finish();

    report(&PrResult::Created(created?));
    Ok(())
}

/// Fail fast on unrecoverable environment problems
fn preflight() -> Result<()> {
    if !git::is_git_installed() {
        return Err(MkprError::MissingDependency("git".to_string()));
    }
    if !gh::is_gh_installed() {
        return Err(MkprError::MissingDependency(
            "GitHub CLI (gh)".to_string(),
        ));
    }
    if !gh::is_gh_authenticated() {
        return Err(MkprError::NotAuthenticated);
    }
    if !git::is_git_repo() {
        return Err(MkprError::NotAGitRepository);
    }
    Ok(())
}

/// Resolve the current branch and reject states a PR can't start from
fn resolve_branch() -> Result<String> {
    let branch = git::current_branch()?;

    // rev-parse prints the literal "HEAD" when detached
    if branch == "HEAD" {
        return Err(MkprError::DetachedHead);
    }
    if branch == "main" || branch == "master" {
        return Err(MkprError::OnDefaultBranch(branch));
    }

    Ok(branch)
}

/// Commit outstanding working-tree changes, if any.
///
/// A clean tree skips the step entirely. An empty commit message aborts
/// before anything is staged.
fn commit_outstanding_changes() -> Result<()> {
    if git::is_clean()? {
        print_skip("Working tree clean, nothing to commit");
        return Ok(());
    }

    println!("{YELLOW}Uncommitted changes detected:{RESET}");
    let status = git::short_status()?;
    for line in status.lines() {
        println!("  {GRAY}{}{RESET}", line);
    }
    println!();

    let message = prompt::input_line("Commit message");
    if message.is_empty() {
        return Err(MkprError::EmptyInput("Commit message".to_string()));
    }

    git::stage_all()?;
    git::commit(&message)?;
    print_success("Changes committed");

    Ok(())
}

/// Push the branch when it is ahead of (or missing) its tracking branch
fn sync_with_remote(remote: &str, branch: &str) -> Result<()> {
    let needs_push = if git::has_upstream()? {
        git::commits_ahead()? > 0
    } else {
        print_action(&format!("No tracking branch, pushing {} to {}", branch, remote));
        true
    };

    if !needs_push {
        print_skip("Branch is in sync with its tracking branch");
        return Ok(());
    }

    let spinner = Spinner::new(&format!("Pushing {} to {}...", branch, remote));
    let outcome = git::push_branch(remote, branch);
    spinner.finish();

    match outcome? {
        PushOutcome::Pushed => print_success(&format!("Pushed {}", branch)),
        PushOutcome::AlreadyUpToDate => print_skip("Remote already up-to-date"),
    }

    Ok(())
}

/// Collect PR metadata at sequential prompts
fn collect_metadata(config: &Config, branch: &str) -> Result<PrMetadata> {
    println!(
        "Opening a pull request for {CYAN}{}{RESET}. Metadata:",
        branch
    );

    let base = prompt::input("Base branch", &config.default_base);
    let title = prompt::input_required("PR title");
    if title.is_empty() {
        // Only happens when stdin is exhausted mid-prompt
        return Err(MkprError::EmptyInput("PR title".to_string()));
    }
    let body = prompt::read_multiline("PR description");
    let reviewers = prompt::parse_csv(&prompt::input_optional("Reviewers (comma-separated)"));
    let labels = prompt::parse_csv(&prompt::input_optional("Labels (comma-separated)"));
    let draft = prompt::confirm("Create as draft?", config.draft);

    Ok(PrMetadata {
        base,
        title,
        body,
        reviewers,
        labels,
        draft,
    })
}

/// Report the outcome of the PR step
fn report(result: &PrResult) {
    println!();
    match result {
        PrResult::Created(url) => {
            print_success(&format!("Pull request created: {}", url));
            print_hint("View it with: gh pr view --web");
        }
        PrResult::AlreadyExists(existing) => {
            print_skip(&format!("A pull request already exists: {}", existing));
            print_hint("View it with: gh pr view --web");
        }
    }
}

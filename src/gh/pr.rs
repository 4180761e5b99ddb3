//! PR command assembly and creation.

use std::process::Command;

use crate::error::{MkprError, Result};

use super::types::PrMetadata;

/// Check if the GitHub CLI (gh) is installed and available in PATH
pub fn is_gh_installed() -> bool {
    Command::new("gh")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check if the user is authenticated with GitHub CLI
///
/// Uses `gh auth status` which returns exit code 0 if authenticated.
pub fn is_gh_authenticated() -> bool {
    Command::new("gh")
        .args(["auth", "status"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Assemble the `gh` argument vector for creating a PR
///
/// Required metadata always contributes its flags; optional fields left
/// empty contribute nothing, so the constructed command only carries
/// what the user actually supplied.
pub fn build_pr_args(head_branch: &str, meta: &PrMetadata) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "pr".into(),
        "create".into(),
        "--base".into(),
        meta.base.clone(),
        "--head".into(),
        head_branch.to_string(),
        "--title".into(),
        meta.title.clone(),
        "--body".into(),
        meta.body.clone(),
    ];

    for reviewer in &meta.reviewers {
        args.push("--reviewer".into());
        args.push(reviewer.clone());
    }

    for label in &meta.labels {
        args.push("--label".into());
        args.push(label.clone());
    }

    if meta.draft {
        args.push("--draft".into());
    }

    args
}

/// Create a pull request for the given branch using the GitHub CLI
///
/// Returns the PR URL printed by `gh pr create` on success.
pub fn create_pull_request(head_branch: &str, meta: &PrMetadata) -> Result<String> {
    let args = build_pr_args(head_branch, meta);

    let output = Command::new("gh").args(&args).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MkprError::GhError(format!(
            "Failed to create PR: {}",
            stderr.trim()
        )));
    }

    // gh prints the new PR URL on stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    let url = stdout.trim().to_string();

    if url.is_empty() {
        return Err(MkprError::GhError(
            "PR created but no URL was returned".to_string(),
        ));
    }

    Ok(url)
}

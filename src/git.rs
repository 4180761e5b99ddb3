use crate::error::{MkprError, Result};
use std::process::Command;

/// Check if git is installed and available in PATH
pub fn is_git_installed() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check if current directory is a git repository
pub fn is_git_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Get the current branch name
///
/// Returns the literal string `HEAD` when the repository is in detached
/// HEAD state; callers treat that as an unusable branch.
pub fn current_branch() -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Check if working directory is clean (no uncommitted changes)
pub fn is_clean() -> Result<bool> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(output.stdout.is_empty())
}

/// One-line-per-file summary of outstanding changes
pub fn short_status() -> Result<String> {
    let output = Command::new("git").args(["status", "--short"]).output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .trim_end()
        .to_string())
}

/// Stage all outstanding changes
pub fn stage_all() -> Result<()> {
    let output = Command::new("git").args(["add", "-A"]).output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(format!(
            "Failed to stage changes: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}

/// Commit staged changes with the given message
pub fn commit(message: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(format!(
            "Failed to commit: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}

/// Check whether the current branch has a remote tracking branch
pub fn has_upstream() -> Result<bool> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])
        .output()?;

    Ok(output.status.success())
}

/// Number of local commits not yet on the tracking branch
///
/// Only meaningful when [`has_upstream`] is true.
pub fn commits_ahead() -> Result<u32> {
    let output = Command::new("git")
        .args(["rev-list", "--count", "@{u}..HEAD"])
        .output()?;

    if !output.status.success() {
        return Err(MkprError::GitError(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let count = String::from_utf8_lossy(&output.stdout).trim().to_string();
    count
        .parse::<u32>()
        .map_err(|_| MkprError::GitError(format!("Unexpected rev-list output: {}", count)))
}

/// Outcome of a completed push
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Commits were pushed (the upstream is created if it was missing)
    Pushed,
    /// Remote already had everything
    AlreadyUpToDate,
}

/// Push the given branch to the remote with upstream tracking
///
/// Uses `git push --set-upstream <remote> <branch>` so a missing
/// tracking branch is created on the fly. A rejected push (permission,
/// non-fast-forward) is an error; there is no force retry.
pub fn push_branch(remote: &str, branch: &str) -> Result<PushOutcome> {
    let output = Command::new("git")
        .args(["push", "--set-upstream", remote, branch])
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() {
        // git reports this on stderr even on success
        if stderr.contains("Everything up-to-date") {
            return Ok(PushOutcome::AlreadyUpToDate);
        }
        return Ok(PushOutcome::Pushed);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let message = if stderr.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.trim().to_string()
    };

    Err(MkprError::GitError(format!(
        "Failed to push {}: {}",
        branch, message
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{init_repo_with_commit, CwdGuard, CWD_MUTEX};

    #[test]
    fn test_is_git_installed_returns_bool() {
        // Verifies the probe runs without panicking regardless of system
        let result = is_git_installed();
        assert!(result || !result);
    }

    #[test]
    fn test_is_git_repo_false_outside_repo() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());

        assert!(!is_git_repo());
    }

    #[test]
    fn test_current_branch_in_fresh_repo() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());

        assert!(is_git_repo());
        assert_eq!(current_branch().unwrap(), "main");
    }

    #[test]
    fn test_is_clean_detects_new_file() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());

        assert!(is_clean().unwrap());

        std::fs::write(dir.path().join("new.txt"), "content").unwrap();
        assert!(!is_clean().unwrap());

        let status = short_status().unwrap();
        assert!(status.contains("new.txt"));
    }

    #[test]
    fn test_stage_and_commit_clears_dirty_tree() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());

        std::fs::write(dir.path().join("change.txt"), "content").unwrap();
        stage_all().unwrap();
        commit("Add change.txt").unwrap();

        assert!(is_clean().unwrap());
    }

    #[test]
    fn test_has_upstream_false_without_remote() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());

        assert!(!has_upstream().unwrap());
    }

    #[test]
    fn test_push_creates_upstream_and_syncs() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let remote_dir = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        // Bare repository standing in for the hosted remote
        std::process::Command::new("git")
            .args(["init", "--bare", "--initial-branch=main"])
            .current_dir(remote_dir.path())
            .output()
            .unwrap();

        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());
        std::process::Command::new("git")
            .args(["remote", "add", "origin"])
            .arg(remote_dir.path())
            .output()
            .unwrap();

        let outcome = push_branch("origin", "main").unwrap();
        assert_eq!(outcome, PushOutcome::Pushed);
        assert!(has_upstream().unwrap());
        assert_eq!(commits_ahead().unwrap(), 0);

        // A second push with nothing new reports up-to-date
        let outcome = push_branch("origin", "main").unwrap();
        assert_eq!(outcome, PushOutcome::AlreadyUpToDate);

        // A new commit makes the branch ahead again
        std::fs::write(dir.path().join("more.txt"), "content").unwrap();
        stage_all().unwrap();
        commit("Add more.txt").unwrap();
        assert_eq!(commits_ahead().unwrap(), 1);
    }

    #[test]
    fn test_push_to_missing_remote_is_an_error() {
        if !is_git_installed() {
            return;
        }
        let _lock = CWD_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::enter(dir.path());
        init_repo_with_commit(dir.path());

        let result = push_branch("origin", "main");
        assert!(matches!(result, Err(MkprError::GitError(_))));
    }

    #[test]
    fn test_push_outcome_variants_are_distinct() {
        assert_ne!(PushOutcome::Pushed, PushOutcome::AlreadyUpToDate);
    }
}

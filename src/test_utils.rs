//! Test utilities shared across modules.
//!
//! The git helpers in this crate run subprocesses in the current working
//! directory, so tests that exercise them build a disposable repository
//! in a temp dir and chdir into it. Those tests must serialize on
//! [`CWD_MUTEX`] to stay correct under parallel test execution.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

/// Mutex to serialize tests that change the current working directory.
pub static CWD_MUTEX: Mutex<()> = Mutex::new(());

/// RAII guard that chdirs into a directory and restores the previous
/// working directory on drop.
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Initialize a git repository on branch `main` with one commit.
///
/// Identity is configured locally so commits work on machines without
/// global git config.
pub fn init_repo_with_commit(dir: &Path) {
    run_git(dir, &["init", "--initial-branch=main"]);
    run_git(dir, &["config", "user.name", "mkpr tests"]);
    run_git(dir, &["config", "user.email", "mkpr@example.com"]);
    std::fs::write(dir.join("README.md"), "# fixture\n").unwrap();
    run_git(dir, &["add", "-A"]);
    run_git(dir, &["commit", "-m", "Initial commit"]);
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

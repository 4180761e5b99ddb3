//! GitHub CLI integration for PR operations.
//!
//! This module provides functions to interact with the GitHub CLI for
//! checking prerequisites and managing pull requests.
//!
//! # Modules
//!
//! - [`types`] - Core types for PR operations
//! - [`detection`] - Existing-PR detection for branches
//! - [`pr`] - PR command assembly and creation

mod detection;
mod pr;
mod types;

pub use detection::{get_existing_pr_url, pr_exists_for_branch};
pub use pr::{build_pr_args, create_pull_request, is_gh_authenticated, is_gh_installed};
pub use types::{PrMetadata, PrResult};

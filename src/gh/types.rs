//! Core types for GitHub PR operations.

/// Metadata collected at the prompts, consumed by `gh pr create`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrMetadata {
    /// Base branch the PR merges into
    pub base: String,
    /// PR title (always non-empty once collected)
    pub title: String,
    /// PR description, may be empty
    pub body: String,
    /// Requested reviewers, may be empty
    pub reviewers: Vec<String>,
    /// Labels to apply, may be empty
    pub labels: Vec<String>,
    /// Whether to open the PR as a draft
    pub draft: bool,
}

/// Result of the PR creation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrResult {
    /// PR created successfully, contains PR URL
    Created(String),
    /// An open PR already exists for the branch, contains its URL
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_default_is_all_empty() {
        let meta = PrMetadata::default();
        assert!(meta.base.is_empty());
        assert!(meta.title.is_empty());
        assert!(meta.body.is_empty());
        assert!(meta.reviewers.is_empty());
        assert!(meta.labels.is_empty());
        assert!(!meta.draft);
    }

    #[test]
    fn test_pr_result_variants_are_distinct() {
        let url = "https://github.com/owner/repo/pull/1".to_string();
        assert_ne!(PrResult::Created(url.clone()), PrResult::AlreadyExists(url));
    }

    #[test]
    fn test_pr_result_created_contains_url() {
        let url = "https://github.com/owner/repo/pull/42".to_string();
        let result = PrResult::Created(url.clone());
        assert_eq!(result, PrResult::Created(url));
    }
}

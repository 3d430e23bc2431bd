// API client for the GitHub REST endpoints the dashboard reads
pub mod github;

// Re-export common types
pub use github::{
    classify_status, GitHubClient, GitHubError, GitHubRepo, GitHubUser, StatusClass,
    GITHUB_API_BASE, NOT_FOUND_MESSAGE, REPOS_PER_PAGE,
};
